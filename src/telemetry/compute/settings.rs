use crate::store::model::{AuthenticationMethod, Settings};
use crate::store::{DataStore, StoreResult};
use crate::telemetry::report::{
    SettingsDockerTelemetry, SettingsTelemetry, TelemetryData, AUTHENTICATION_METHOD_INTERNAL,
    AUTHENTICATION_METHOD_LDAP, AUTHENTICATION_METHOD_OAUTH,
};
use crate::utils::duration;

/// A malformed snapshot interval is logged and reported as 0; it never
/// fails the computer.
pub fn compute(data: &mut TelemetryData, store: &dyn DataStore) -> StoreResult<()> {
    let settings = store.settings()?;

    data.settings = SettingsTelemetry {
        authentication_mode: authentication_mode(settings.authentication_method).to_string(),
        use_logo_url: !settings.logo_url.is_empty(),
        use_black_listed_labels: !settings.black_listed_labels.is_empty(),
        docker: SettingsDockerTelemetry {
            restrict_bind_mounts: !settings.allow_bind_mounts_for_regular_users,
            restrict_privileged_mode: !settings.allow_privileged_mode_for_regular_users,
            restrict_volume_browser: !settings.allow_volume_browser_for_regular_users,
        },
        host_management: settings.enable_host_management_features,
        snapshot_interval: snapshot_interval(&settings),
    };

    Ok(())
}

fn authentication_mode(method: AuthenticationMethod) -> &'static str {
    match method {
        AuthenticationMethod::Ldap => AUTHENTICATION_METHOD_LDAP,
        AuthenticationMethod::OAuth => AUTHENTICATION_METHOD_OAUTH,
        AuthenticationMethod::Internal | AuthenticationMethod::Unknown(_) => {
            AUTHENTICATION_METHOD_INTERNAL
        }
    }
}

fn snapshot_interval(settings: &Settings) -> f64 {
    if settings.snapshot_interval.is_empty() {
        return 0.0;
    }

    match duration::parse_seconds(&settings.snapshot_interval) {
        Ok(seconds) => seconds,
        Err(e) => {
            tracing::warn!(
                error = %e,
                value = %settings.snapshot_interval,
                "unable to parse snapshot interval duration"
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::store::model::Pair;
    use crate::store::MemoryStore;

    fn compute_for(settings: Settings) -> SettingsTelemetry {
        let mut store = MemoryStore::with_identifier("id");
        store.settings = Some(settings);
        let mut data = TelemetryData::default();
        compute(&mut data, &store).unwrap();
        data.settings
    }

    #[test]
    fn defaults_restrict_everything() {
        let telemetry = compute_for(Settings::default());

        assert_eq!(telemetry.authentication_mode, "internal");
        assert!(!telemetry.use_logo_url);
        assert!(!telemetry.use_black_listed_labels);
        assert!(telemetry.docker.restrict_bind_mounts);
        assert!(telemetry.docker.restrict_privileged_mode);
        assert!(telemetry.docker.restrict_volume_browser);
        assert!(!telemetry.host_management);
        assert_eq!(telemetry.snapshot_interval, 0.0);
    }

    #[test]
    fn reflects_configured_features() {
        let telemetry = compute_for(Settings {
            logo_url: "https://example.com/logo.png".to_string(),
            black_listed_labels: vec![Pair {
                name: "internal".to_string(),
                value: "true".to_string(),
            }],
            authentication_method: AuthenticationMethod::Ldap,
            allow_bind_mounts_for_regular_users: true,
            allow_privileged_mode_for_regular_users: false,
            allow_volume_browser_for_regular_users: true,
            enable_host_management_features: true,
            snapshot_interval: "5m".to_string(),
        });

        assert_eq!(telemetry.authentication_mode, "ldap");
        assert!(telemetry.use_logo_url);
        assert!(telemetry.use_black_listed_labels);
        assert!(!telemetry.docker.restrict_bind_mounts);
        assert!(telemetry.docker.restrict_privileged_mode);
        assert!(!telemetry.docker.restrict_volume_browser);
        assert!(telemetry.host_management);
        assert_eq!(telemetry.snapshot_interval, 300.0);
    }

    #[test]
    fn maps_authentication_methods() {
        assert_eq!(authentication_mode(AuthenticationMethod::Internal), "internal");
        assert_eq!(authentication_mode(AuthenticationMethod::Ldap), "ldap");
        assert_eq!(authentication_mode(AuthenticationMethod::OAuth), "oauth");
        assert_eq!(authentication_mode(AuthenticationMethod::Unknown(8)), "internal");
    }

    #[test]
    fn snapshot_interval_parsing() {
        let interval = |value: &str| {
            compute_for(Settings {
                snapshot_interval: value.to_string(),
                ..Settings::default()
            })
            .snapshot_interval
        };

        assert_eq!(interval("30s"), 30.0);
        assert_eq!(interval(""), 0.0);
        assert_eq!(interval("1h30m"), 5400.0);
    }

    /// Collects formatted log lines emitted while it is the default subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn malformed_snapshot_interval_is_not_fatal() {
        let mut store = MemoryStore::with_identifier("id");
        store.settings = Some(Settings {
            snapshot_interval: "garbage".to_string(),
            authentication_method: AuthenticationMethod::OAuth,
            ..Settings::default()
        });

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let mut data = TelemetryData::default();
        let result = tracing::subscriber::with_default(subscriber, || compute(&mut data, &store));

        assert!(result.is_ok());
        assert_eq!(data.settings.snapshot_interval, 0.0);
        assert_eq!(data.settings.authentication_mode, "oauth");

        let logged = logs.contents();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("unable to parse snapshot interval duration"), "{logged}");
        assert!(logged.contains("garbage"), "{logged}");
    }
}
