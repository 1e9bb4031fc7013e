pub mod context;
pub mod resolvers;
pub mod scalars;
pub mod schema;
pub mod types;

pub use resolvers::{MutationRoot, QueryRoot};
pub use schema::{create_schema, GatewaySchema};
pub use types::*;
