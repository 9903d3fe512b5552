//! Handler methods for the App struct, one module per concern.

mod analysis;
mod browse;
mod settings;
