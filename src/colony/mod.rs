//! Busca de padrões graduais por colônia de formigas (ACO-GRAANK).
//!
//! Este módulo implementa o ciclo GENERATE→FILTER→VALIDATE→SCORE:
//!
//! - **PatternGenerator**: sorteia uma direção (ou ausência) por atributo,
//!   ponderada pela matriz de feromônio
//! - **filter**: descarta duplicatas e candidatos implicados por
//!   anti-monotonicidade
//! - **PatternValidator**: combina as matrizes binárias e calcula o suporte
//! - **PheromoneMatrix**: deposita em vencedores, evapora em perdedores
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use gradaco::colony::SearchController;
//! use gradaco::types::config::SearchConfig;
//!
//! let mut controller = SearchController::new(&store, SearchConfig::with_min_support(0.5))?;
//! let outcome = controller.run()?;
//! for pattern in &outcome.winners {
//!     println!("{}", pattern);
//! }
//! ```

mod controller;
pub mod filter;
mod generator;
mod pheromone;
mod report;
mod validator;

pub use controller::{SearchController, SearchOutcome, SearchStats, StepOutcome};
pub use generator::PatternGenerator;
pub use pheromone::{PheromoneMatrix, PheromoneTrail};
pub use report::{ReportedPattern, SearchReport};
pub use validator::{PatternValidator, Validation};
