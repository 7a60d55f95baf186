//! Тесты лексического анализатора

pub mod scanner_tests;
