pub(crate) mod browse;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod list;

use notehub_api::ApiClient;
use notehub_query::QueryClient;

/// The production cache client every command runs against.
pub(crate) type Client = QueryClient<ApiClient>;
