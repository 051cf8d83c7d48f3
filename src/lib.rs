//! # gradaco
//!
//! Busca de padrões graduais por colônia de formigas (ACO-GRAANK).
//!
//! Um padrão gradual como `[temp+, sales-]` afirma que, numa fração dos
//! pares de linhas pelo menos igual ao suporte mínimo, `temp` cresce
//! enquanto `sales` decresce. O gradaco explora o espaço desses padrões de
//! forma estocástica, guiando a geração por uma matriz de feromônio.
//!
//! ## Módulos
//!
//! - [`pattern`] - Itens e padrões graduais
//! - [`relations`] - Armazém de relações binárias (matrizes de pares de linhas)
//! - [`colony`] - Feromônio, gerador, validador e controlador da busca
//! - [`dataset`] - Conjuntos de dados JSON que alimentam o armazém
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Configuração e erros

#[cfg(feature = "cli")]
pub mod cli;
pub mod colony;
pub mod dataset;
pub mod pattern;
pub mod relations;
pub mod types;

pub use types::config::Config;
pub use types::errors::{GradacoError, GradacoResult};
