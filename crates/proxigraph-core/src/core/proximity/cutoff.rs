/// A distance cutoff fixed for a whole proximity graph type.
///
/// Only one cutoff value is ever used per concrete graph type, so it lives in the type rather
/// than in each graph instance.
pub trait NeighborCutoff: 'static {
    /// The cutoff distance in Ångströms.
    const CUTOFF: f64;
    const CUTOFF_SQUARED: f64 = Self::CUTOFF * Self::CUTOFF;
    /// A stable name used in configuration files.
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TenAngstrom;

impl NeighborCutoff for TenAngstrom {
    const CUTOFF: f64 = 10.0;
    const NAME: &'static str = "ten-angstrom";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwelveAngstrom;

impl NeighborCutoff for TwelveAngstrom {
    const CUTOFF: f64 = 12.0;
    const NAME: &'static str = "twelve-angstrom";
}
