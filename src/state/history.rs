// ============================================================================
// HISTORY STATE - Historial de análisis (lista + selección actual)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{default_analysis_id, HistoryRecord};
use crate::services::HistoryDataSource;
use crate::state::session::SessionState;

/// Estado del historial. Lee el token de la sesión (solo lectura) y habla
/// con el origen de datos inyectado al construir; ningún error de las
/// operaciones llega al caller, todo se refleja en `error`.
#[derive(Clone)]
pub struct HistoryState {
    session: SessionState,
    source: Rc<dyn HistoryDataSource>,
    items: Rc<RefCell<Vec<HistoryRecord>>>,
    current_analysis_id: Rc<RefCell<Option<i64>>>,
    is_loading: Rc<RefCell<bool>>,
    error: Rc<RefCell<Option<String>>>,
}

impl HistoryState {
    pub fn new(session: SessionState, source: Rc<dyn HistoryDataSource>) -> Self {
        Self {
            session,
            source,
            items: Rc::new(RefCell::new(Vec::new())),
            current_analysis_id: Rc::new(RefCell::new(None)),
            is_loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn items(&self) -> Vec<HistoryRecord> {
        self.items.borrow().clone()
    }

    pub fn current_analysis_id(&self) -> Option<i64> {
        *self.current_analysis_id.borrow()
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Selección manual de un análisis, sin validación
    pub fn set_current_analysis_id(&self, id: Option<i64>) {
        *self.current_analysis_id.borrow_mut() = id;
    }

    /// Recarga el historial desde el origen de datos. Si falla, la lista
    /// queda intacta y el mensaje se guarda en `error`.
    pub async fn fetch_history(&self) {
        *self.is_loading.borrow_mut() = true;

        let token = self.session.token();
        match self.source.fetch(token.as_deref()).await {
            Ok(records) => self.apply_fetched(records),
            Err(e) => {
                log::error!("❌ No se pudo obtener el historial: {}", e);
                *self.error.borrow_mut() = Some(e);
            }
        }

        // Pase lo que pase, la carga termina aquí
        *self.is_loading.borrow_mut() = false;
    }

    /// Elimina un análisis. Solo si el origen confirma se quita el
    /// registro local; si era el seleccionado, se limpia la selección.
    pub async fn delete_item(&self, id: i64) {
        let token = self.session.token();
        match self.source.delete(token.as_deref(), id).await {
            Ok(()) => self.apply_deleted(id),
            Err(e) => {
                log::error!("❌ No se pudo eliminar el análisis {}: {}", id, e);
                *self.error.borrow_mut() = Some(e);
            }
        }
    }

    fn apply_fetched(&self, records: Vec<HistoryRecord>) {
        *self.current_analysis_id.borrow_mut() = default_analysis_id(&records);
        *self.items.borrow_mut() = records;
        *self.error.borrow_mut() = None;
    }

    fn apply_deleted(&self, id: i64) {
        self.items.borrow_mut().retain(|item| item.id != id);
        if *self.current_analysis_id.borrow() == Some(id) {
            *self.current_analysis_id.borrow_mut() = None;
        }
        *self.error.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::history_source::generate_mock_history;
    use crate::services::MockHistorySource;
    use chrono::{TimeZone, Utc};

    fn store_with_mock_items() -> HistoryState {
        let store = HistoryState::new(SessionState::new(), Rc::new(MockHistorySource));
        let base = Utc.with_ymd_and_hms(2024, 9, 20, 12, 24, 22).unwrap();
        store.apply_fetched(generate_mock_history(base));
        store
    }

    #[test]
    fn tras_el_fetch_se_selecciona_el_mayor_id_no_en_proceso() {
        let store = store_with_mock_items();
        assert_eq!(store.items().len(), 5);
        assert_eq!(store.current_analysis_id(), Some(4));
        assert_eq!(store.error(), None);
    }

    #[test]
    fn borrar_el_seleccionado_limpia_la_seleccion() {
        let store = store_with_mock_items();
        store.apply_deleted(4);

        assert_eq!(store.items().len(), 4);
        assert!(store.items().iter().all(|item| item.id != 4));
        assert_eq!(store.current_analysis_id(), None);
    }

    #[test]
    fn borrar_otro_registro_conserva_la_seleccion() {
        let store = store_with_mock_items();
        store.apply_deleted(2);

        assert_eq!(store.items().len(), 4);
        assert_eq!(store.current_analysis_id(), Some(4));
    }

    #[test]
    fn borrar_un_id_desconocido_no_hace_nada() {
        let store = store_with_mock_items();
        store.apply_deleted(99);

        assert_eq!(store.items().len(), 5);
        assert_eq!(store.current_analysis_id(), Some(4));
    }

    #[test]
    fn la_seleccion_manual_no_se_valida() {
        let store = store_with_mock_items();
        store.set_current_analysis_id(Some(42));
        assert_eq!(store.current_analysis_id(), Some(42));
        store.set_current_analysis_id(None);
        assert_eq!(store.current_analysis_id(), None);
    }

    #[test]
    fn un_fetch_sin_registros_elegibles_deja_la_seleccion_en_none() {
        let store = store_with_mock_items();
        store.apply_fetched(Vec::new());
        assert_eq!(store.current_analysis_id(), None);
        assert!(store.items().is_empty());
    }
}
