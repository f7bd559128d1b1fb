use serde::{Deserialize, Serialize};

/// Estado de un análisis dentro del historial
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Expired,
    Processing,
    Completed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Expired => "expired",
            AnalysisStatus::Processing => "processing",
            AnalysisStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStatus::Expired => "Expirado",
            AnalysisStatus::Processing => "En proceso",
            AnalysisStatus::Completed => "Completado",
        }
    }
}

/// Registro de análisis tal como lo devuelve el backend.
/// El generador mock y los datos antiguos del backend omiten user_id/video_id.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub video_id: Option<i64>,
    pub time: String,
    pub status: AnalysisStatus,
    pub expiry: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryListResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Vec<HistoryRecord>,
}

/// Cuerpo de error del backend: { "message": ... }
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Registro activo por defecto tras cada fetch: el de mayor id cuyo
/// estado no sea processing; None si ninguno califica.
pub fn default_analysis_id(items: &[HistoryRecord]) -> Option<i64> {
    items
        .iter()
        .filter(|item| item.status != AnalysisStatus::Processing)
        .map(|item| item.id)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, status: AnalysisStatus) -> HistoryRecord {
        HistoryRecord {
            id,
            user_id: None,
            video_id: None,
            time: format!("2024-09-20 12:24:{:02}", id),
            status,
            expiry: "2024-03-20".to_string(),
        }
    }

    #[test]
    fn seleccion_ignora_registros_en_proceso() {
        let items = vec![
            record(1, AnalysisStatus::Expired),
            record(2, AnalysisStatus::Completed),
            record(3, AnalysisStatus::Completed),
            record(4, AnalysisStatus::Completed),
            record(5, AnalysisStatus::Processing),
        ];
        // El id 5 está en proceso; el mayor elegible es 4
        assert_eq!(default_analysis_id(&items), Some(4));
    }

    #[test]
    fn seleccion_vacia_o_todo_en_proceso_es_none() {
        assert_eq!(default_analysis_id(&[]), None);
        let items = vec![
            record(1, AnalysisStatus::Processing),
            record(2, AnalysisStatus::Processing),
        ];
        assert_eq!(default_analysis_id(&items), None);
    }

    #[test]
    fn seleccion_con_un_solo_registro_completado() {
        let items = vec![record(9, AnalysisStatus::Completed)];
        assert_eq!(default_analysis_id(&items), Some(9));
    }

    #[test]
    fn status_se_serializa_en_minusculas() {
        let json = serde_json::to_string(&AnalysisStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let parsed: AnalysisStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(parsed, AnalysisStatus::Expired);
    }
}
