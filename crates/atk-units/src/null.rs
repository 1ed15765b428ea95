//! Identity conversion.

use crate::unitconv::RawConversion;

/// Returns its input unchanged in both directions.
///
/// Used for fields with no meaningful physics representation. By convention
/// a null conversion always carries id [`NullUnitConv::ID`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullUnitConv;

impl NullUnitConv {
    pub const ID: u32 = 0;
}

impl RawConversion for NullUnitConv {
    fn raw_eng_to_phys(&self, eng_value: f64) -> Vec<f64> {
        vec![eng_value]
    }

    fn raw_phys_to_eng(&self, phys_value: f64) -> Vec<f64> {
        vec![phys_value]
    }
}
