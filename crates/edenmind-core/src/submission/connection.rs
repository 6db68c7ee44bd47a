//! Owned handle to the diagnosis service connection.

use std::fmt;
use std::sync::Arc;

use edenmind_service::DiagnosisService;

use super::{SubmitError, SubmitResult};
use crate::config::CoreConfig;

/// Connection to the diagnosis service, live or not yet established.
///
/// The transport collaborator establishes the session and attaches the
/// service; until then every submission fails with
/// [`SubmitError::ServiceUnavailable`].
#[derive(Clone)]
pub struct ServiceConnection {
    endpoint: String,
    service: Option<Arc<dyn DiagnosisService>>,
}

impl ServiceConnection {
    /// A connection that has not been established yet.
    pub fn disconnected(config: &CoreConfig) -> Self {
        Self {
            endpoint: config.service_url.clone(),
            service: None,
        }
    }

    /// A live connection backed by `service`.
    pub fn live(config: &CoreConfig, service: Arc<dyn DiagnosisService>) -> Self {
        Self {
            endpoint: config.service_url.clone(),
            service: Some(service),
        }
    }

    /// Attach the service once the session is established.
    pub fn attach(&mut self, service: Arc<dyn DiagnosisService>) {
        self.service = Some(service);
    }

    /// Drop the service, e.g. when the session is torn down.
    pub fn detach(&mut self) {
        self.service = None;
    }

    pub fn is_live(&self) -> bool {
        self.service.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The live service, or `ServiceUnavailable`.
    pub fn service(&self) -> SubmitResult<Arc<dyn DiagnosisService>> {
        self.service.clone().ok_or(SubmitError::ServiceUnavailable)
    }
}

impl fmt::Debug for ServiceConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConnection")
            .field("endpoint", &self.endpoint)
            .field("live", &self.is_live())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edenmind_service::MockDiagnosisService;

    #[test]
    fn test_disconnected_is_unavailable() {
        let conn = ServiceConnection::disconnected(&CoreConfig::new("http://replica"));

        assert!(!conn.is_live());
        assert_eq!(conn.endpoint(), "http://replica");
        assert!(matches!(conn.service(), Err(SubmitError::ServiceUnavailable)));
    }

    #[test]
    fn test_attach_and_detach() {
        let mut conn = ServiceConnection::disconnected(&CoreConfig::new("http://replica"));
        conn.attach(Arc::new(MockDiagnosisService::new()));
        assert!(conn.service().is_ok());

        conn.detach();
        assert!(conn.service().is_err());
        assert_eq!(
            format!("{:?}", conn),
            "ServiceConnection { endpoint: \"http://replica\", live: false }"
        );
    }
}
