/// A macro to simplify read-through caching of fallible lookups.
///
/// This macro checks if a value is present in the cache.
/// If found, it returns the cached value.
/// If not found, it awaits the provided future to compute the value,
/// stores it in the cache, and then returns the computed value.
/// Errors from the future are returned as-is and nothing is cached.
///
/// # Arguments
/// * `$cache`: The cache instance to use. It must have async `get` and `insert` methods.
/// * `$key`: The key to use for caching the value.
/// * `$block`: The future to await if the value is not found in cache.
///
/// # Example
/// ```rust,ignore
/// let details = cached!(cache, movie_id, async move {
///     fetch_details(movie_id).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        if let Some(cached) = $cache.get(&$key).await {
            Ok(cached)
        } else {
            match $block.await {
                Ok(value) => {
                    $cache.insert($key, value.clone()).await;
                    Ok(value)
                }
                Err(e) => Err(e),
            }
        }
    }};
}
