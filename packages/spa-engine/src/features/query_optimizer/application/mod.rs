mod optimise_query;

pub use optimise_query::{optimise_query, OptimiseQueryUseCase};
