use crate::inventory_mapping::domain::{LicenseEntry, RawLicense};

/// LicenseNormalizer service turning a dependency's license list into raw licenses
///
/// Every component gets at least one license row: an empty list yields a
/// single unknown license (both fields `None`). Otherwise names and URLs are
/// passed through untouched and in order.
#[derive(Debug, Default)]
pub struct LicenseNormalizer {
    license_count: usize,
}

impl LicenseNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `licenses`, tagging each result with `origin`
    pub fn normalize(&mut self, licenses: &[LicenseEntry], origin: &str) -> Vec<RawLicense> {
        let normalized: Vec<RawLicense> = if licenses.is_empty() {
            vec![RawLicense::unknown(origin)]
        } else {
            licenses
                .iter()
                .map(|l| {
                    RawLicense::new(
                        l.license().map(String::from),
                        l.license_url().map(String::from),
                        origin,
                    )
                })
                .collect()
        };

        self.license_count += normalized.len();
        normalized
    }

    /// Total number of license associations produced so far
    pub fn license_count(&self) -> usize {
        self.license_count
    }
}
