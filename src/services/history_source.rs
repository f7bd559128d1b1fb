use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gloo_timers::future::TimeoutFuture;

use crate::models::{AnalysisStatus, HistoryRecord};
use crate::services::api_client::ApiClient;
use crate::utils::MOCK_FETCH_DELAY_MS;

/// Origen de datos del historial. Se elige una sola vez al construir el
/// store: backend real en producción, datos simulados en desarrollo.
#[async_trait(?Send)]
pub trait HistoryDataSource {
    async fn fetch(&self, token: Option<&str>) -> Result<Vec<HistoryRecord>, String>;
    async fn delete(&self, token: Option<&str>, id: i64) -> Result<(), String>;
}

/// Origen real: GET/DELETE contra la API
pub struct ApiHistorySource {
    client: ApiClient,
}

impl ApiHistorySource {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }
}

impl Default for ApiHistorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl HistoryDataSource for ApiHistorySource {
    async fn fetch(&self, token: Option<&str>) -> Result<Vec<HistoryRecord>, String> {
        self.client.get_history(token).await
    }

    async fn delete(&self, token: Option<&str>, id: i64) -> Result<(), String> {
        self.client.delete_history_item(token, id).await
    }
}

/// Origen simulado: lista determinista tras un retardo fijo, sin red
pub struct MockHistorySource;

#[async_trait(?Send)]
impl HistoryDataSource for MockHistorySource {
    async fn fetch(&self, _token: Option<&str>) -> Result<Vec<HistoryRecord>, String> {
        TimeoutFuture::new(MOCK_FETCH_DELAY_MS).await;
        Ok(generate_mock_history(Utc::now()))
    }

    async fn delete(&self, _token: Option<&str>, _id: i64) -> Result<(), String> {
        // Sin red: el store elimina el registro localmente
        Ok(())
    }
}

/// Genera 5 registros con ids 1..=5: el primero expirado, el último en
/// proceso, el resto completados, con marcas de tiempo separadas un segundo
pub fn generate_mock_history(base: DateTime<Utc>) -> Vec<HistoryRecord> {
    (1..=5i64)
        .map(|id| HistoryRecord {
            id,
            user_id: None,
            video_id: None,
            time: (base + Duration::seconds(id - 1))
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            status: match id {
                1 => AnalysisStatus::Expired,
                5 => AnalysisStatus::Processing,
                _ => AnalysisStatus::Completed,
            },
            expiry: "2024-03-20".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn el_mock_genera_cinco_registros_deterministas() {
        let base = Utc.with_ymd_and_hms(2024, 9, 20, 12, 24, 22).unwrap();
        let items = generate_mock_history(base);

        assert_eq!(items.len(), 5);
        assert_eq!(
            items.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            items.iter().map(|r| r.status).collect::<Vec<_>>(),
            vec![
                AnalysisStatus::Expired,
                AnalysisStatus::Completed,
                AnalysisStatus::Completed,
                AnalysisStatus::Completed,
                AnalysisStatus::Processing,
            ]
        );
        for item in &items {
            assert_eq!(item.expiry, "2024-03-20");
            assert_eq!(item.user_id, None);
            assert_eq!(item.video_id, None);
        }
    }

    #[test]
    fn las_marcas_de_tiempo_van_separadas_un_segundo() {
        let base = Utc.with_ymd_and_hms(2024, 9, 20, 12, 24, 22).unwrap();
        let items = generate_mock_history(base);

        assert_eq!(items[0].time, "2024-09-20 12:24:22");
        assert_eq!(items[1].time, "2024-09-20 12:24:23");
        assert_eq!(items[4].time, "2024-09-20 12:24:26");
    }
}
