/*! Integration tests for Polyfold.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - structure: Tests for path resolution, deep cloning and JSON interop on Value trees
 * - collection: Tests for the higher-order sequence operations
 * - flatten: Tests for depth-bounded flattening and its fold definition
 * - combinator: Tests for currying, partial application and pipelines
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("polyfold=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod flatten;
mod structure;
