use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;

/// Perfil del usuario autenticado. `days` no viene del backend: se deriva
/// de `registration_date` al obtener el perfil y nunca se persiste.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfo {
    #[serde(default)]
    pub phone: Option<u64>,
    #[serde(default)]
    pub weixin: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub registration_date: String,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub days: i64,
}

impl UserInfo {
    /// Enriquece el perfil con los días transcurridos desde el registro
    pub fn with_days(mut self, now: DateTime<Utc>) -> Self {
        self.days = days_since(&self.registration_date, now);
        self
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    #[serde(default)]
    pub success: bool,
    pub data: UserInfo,
}

/// Días completos desde la fecha de registro: floor del delta en ms
/// dividido por 86.400.000. Una fecha no parseable cuenta como 0 días.
pub fn days_since(registration_date: &str, now: DateTime<Utc>) -> i64 {
    let Some(registered) = parse_registration_date(registration_date) else {
        log::warn!("⚠️ Fecha de registro no parseable: {}", registration_date);
        return 0;
    };
    let delta_ms = now.signed_duration_since(registered).num_milliseconds();
    delta_ms.div_euclid(MS_PER_DAY)
}

fn parse_registration_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dias_completos_desde_el_registro() {
        let now = Utc.with_ymd_and_hms(2023, 1, 11, 0, 0, 0).unwrap();
        assert_eq!(days_since("2023-01-01", now), 10);
    }

    #[test]
    fn un_dia_parcial_no_cuenta() {
        // 9 días y 23 horas después: floor => 9
        let now = Utc.with_ymd_and_hms(2023, 1, 10, 23, 0, 0).unwrap();
        assert_eq!(days_since("2023-01-01", now), 9);
    }

    #[test]
    fn mismo_dia_son_cero_dias() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(days_since("2023-01-01", now), 0);
    }

    #[test]
    fn fecha_invalida_cae_en_cero() {
        let now = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(days_since("no-es-fecha", now), 0);
    }

    #[test]
    fn with_days_enriquece_el_perfil() {
        let info = UserInfo {
            phone: Some(13812345678),
            weixin: None,
            username: Some("adQd12DAsd1".to_string()),
            registration_date: "2023-01-01".to_string(),
            user_role: Some("member".to_string()),
            days: 0,
        };
        let now = Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(info.with_days(now).days, 31);
    }
}
