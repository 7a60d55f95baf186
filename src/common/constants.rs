//! Константы для sqllexer

/// Размер пакета чтения сканеров по умолчанию (в символах)
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Максимальный размер пакета чтения
pub const MAX_BATCH_SIZE: usize = 65536;

/// Глубина предпросмотра классификатора
pub const LOOKAHEAD: usize = 2;

/// Префикс переменных окружения конфигурации
pub const ENV_PREFIX: &str = "SQLLEXER_";
