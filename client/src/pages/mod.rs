//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state and route-scoped orchestration and delegates
//! rendering details to `components`.

pub mod add_property;
pub mod chat;
pub mod home;
pub mod properties;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Spawn `task` under a page's owner so it is cancelled when the page is
/// torn down.
///
/// DOM and speech callbacks run outside any reactive owner, so pages capture
/// theirs at mount and pass it in.
#[cfg(feature = "hydrate")]
pub(crate) fn spawn_on_page(page: StoredValue<Owner>, task: impl std::future::Future<Output = ()> + 'static) {
    let _ = page.try_with_value(|owner| owner.with(|| leptos::task::spawn_local_scoped_with_cancellation(task)));
}
