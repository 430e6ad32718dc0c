//! Mount point lookup for the WASM entry.
//!
//! The host page must contain a single container with id [`MOUNT_ID`]. When
//! it is missing the app is not started and the body is replaced with
//! [`FALLBACK_HTML`].

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

/// Id of the element the app hydrates into.
pub const MOUNT_ID: &str = "root";

/// Body markup shown when the mount point is missing.
pub const FALLBACK_HTML: &str = "<h1 style='color:red'>ROOT NOT FOUND</h1>";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("mount point #{0} not found")]
    MissingRoot(&'static str),
}

/// Turn an optional lookup result into a mount target.
///
/// # Errors
///
/// Returns [`MountError::MissingRoot`] when the element was not found.
pub fn require_mount<T>(found: Option<T>) -> Result<T, MountError> {
    found.ok_or(MountError::MissingRoot(MOUNT_ID))
}

/// Find the mount element in the current document.
///
/// # Errors
///
/// Returns [`MountError::MissingRoot`] when the document has no element with
/// id [`MOUNT_ID`].
#[cfg(feature = "hydrate")]
pub fn find_mount() -> Result<web_sys::HtmlElement, MountError> {
    use wasm_bindgen::JsCast;

    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    require_mount(el)
}

/// Replace the page body with the fallback message.
pub fn show_fallback() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        {
            body.set_inner_html(FALLBACK_HTML);
        }
    }
}
