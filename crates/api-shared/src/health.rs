use crate::wire::HealthRes;

/// Simple health service shared by the catalog API and the form UI
///
/// Provides a standardised health status for both HTTP surfaces.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance
    ///
    /// # Arguments
    /// * `component` - Name of the component reporting, used in the message
    ///
    /// # Returns
    /// A `HealthRes` indicating the component is healthy.
    pub fn check_health(component: &str) -> HealthRes {
        HealthRes {
            ok: true,
            message: format!("{component} is alive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_component_name() {
        let res = HealthService::check_health("Audience catalog API");
        assert!(res.ok);
        assert_eq!(res.message, "Audience catalog API is alive");
    }
}
