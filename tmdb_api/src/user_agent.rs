/// User agent sent with every request.
pub(crate) fn get_user_agent() -> String {
    format!("tmdb_api/{}", env!("CARGO_PKG_VERSION"))
}
