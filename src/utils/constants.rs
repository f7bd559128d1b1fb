/// Clave de localStorage donde se guarda el token JWT en crudo.
/// Su ausencia implica sesión anónima.
pub const STORAGE_KEY_TOKEN: &str = "videoAnalyzer_jwt";

/// Retardo simulado del origen de datos mock (ms)
pub const MOCK_FETCH_DELAY_MS: u32 = 500;
