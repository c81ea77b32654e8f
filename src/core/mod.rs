//! Core module containing the order model, attribute lookup and error types

pub mod dimensions;
pub mod error;
pub mod order;
pub mod properties;

pub use dimensions::{compose_dimension_phrase, strip_units};
pub use error::{CardsError, ConfigError, FetchError, PreviewError, ValidationError};
pub use order::{Address, Customer, LineItem, LineItemProperty, Order};
pub use properties::{ItemAttributes, resolve};
