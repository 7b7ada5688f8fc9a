//! Flutter bridge for the water intake tracker core.

pub mod api;
