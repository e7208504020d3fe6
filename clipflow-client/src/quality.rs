//! Rendition quality selection.
//!
//! Given a requested quality and the renditions a video actually has, pick
//! the one to play: an exact match when possible, otherwise the nearest
//! available tier below the request, otherwise the nearest above. `auto`
//! resolves the network's effective type to a target tier first.

use clipflow_model::{NetworkEffectiveType, QualityPreference, VideoQuality};

/// Select the rendition to play. Returns `None` only when `available` is
/// empty.
pub fn select_rendition(
    requested: QualityPreference,
    network: Option<NetworkEffectiveType>,
    available: &[VideoQuality],
) -> Option<VideoQuality> {
    let target = match requested {
        QualityPreference::Fixed(quality) => quality,
        QualityPreference::Auto => network
            .unwrap_or(NetworkEffectiveType::FourG)
            .target_quality(),
    };
    nearest_available(target, available)
}

fn nearest_available(target: VideoQuality, available: &[VideoQuality]) -> Option<VideoQuality> {
    if available.contains(&target) {
        return Some(target);
    }

    let ladder = VideoQuality::LADDER;
    let rank = target.rank();

    // Downward from the requested tier first
    for quality in &ladder[rank + 1..] {
        if available.contains(quality) {
            return Some(*quality);
        }
    }
    // Then upward
    for quality in ladder[..rank].iter().rev() {
        if available.contains(quality) {
            return Some(*quality);
        }
    }

    None
}
