use thiserror::Error;

const MISSING_CONTAINER_MESSAGE: &str = "Unable to use scroll container: Ref to child not available, did you pass the ref prop to an element?";
const PREMATURE_UNMOUNT_MESSAGE: &str = "Unable to clean up scroll container: Ref has been unmounted prematurely.";
const ALREADY_MOUNTED_MESSAGE: &str = "Bottom scroll listener is already mounted.";

/// Configuration errors of the bottom scroll listener. Both container errors indicate a wiring mistake of the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScrollListenerError {
    #[error("{}", MISSING_CONTAINER_MESSAGE)]
    MissingContainerOnMount,
    #[error("{}", PREMATURE_UNMOUNT_MESSAGE)]
    ContainerUnmountedPrematurely,
    #[error("{}", ALREADY_MOUNTED_MESSAGE)]
    AlreadyMounted,
    #[error("Unable to listen to scroll events of the {0}")]
    ScrollSurfaceUnavailable(String),
}
