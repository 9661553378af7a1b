//! Bundled resource abstractions
//!
//! Watch faces ship their images as resources compiled into the app
//! bundle. The runtime hands out read-only byte slices by identifier.

/// Identifiers for the resources bundled with the face
///
/// The discriminants match the order resources are packed into the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ResourceId {
    /// Full-screen background image
    BackgroundImage = 0,
    /// Multi-frame sprite animation
    AnimationImage = 1,
    /// Single-frame sprite for runtimes without animation support
    StaticImage = 2,
    /// Font used by the clock
    TimeFont = 3,
    /// Font used by the battery label
    BatteryFont = 4,
}

impl ResourceId {
    /// Get the identifier as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Read-only access to bundled resources
///
/// Resources live for the whole session, so lookups return `'static`
/// slices and never copy.
pub trait ResourceStore {
    /// Look up a resource by identifier
    ///
    /// Returns `None` if the bundle does not contain the resource.
    fn get(&self, id: ResourceId) -> Option<&'static [u8]>;

    /// Check if a resource is present in the bundle
    fn contains(&self, id: ResourceId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneResource(&'static [u8]);

    impl ResourceStore for OneResource {
        fn get(&self, id: ResourceId) -> Option<&'static [u8]> {
            match id {
                ResourceId::AnimationImage => Some(self.0),
                _ => None,
            }
        }
    }

    #[test]
    fn test_ids_follow_bundle_order() {
        assert_eq!(ResourceId::BackgroundImage.as_u8(), 0);
        assert_eq!(ResourceId::AnimationImage.as_u8(), 1);
        assert_eq!(ResourceId::BatteryFont.as_u8(), 4);
    }

    #[test]
    fn test_contains_uses_get() {
        let store = OneResource(&[1, 2, 3]);
        assert!(store.contains(ResourceId::AnimationImage));
        assert!(!store.contains(ResourceId::BackgroundImage));
    }
}
