//! Voice selection for the text-to-speech capability.
//!
//! Speech synthesis itself is an external capability (best-effort, may be
//! absent). This module only decides which of the reported voices to use:
//! saved preference first, then a fixed preferred-name list, then any
//! Microsoft/Google voice, then whatever comes first.

/// A voice reported by the speech capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

/// Natural-sounding voices tried in order when no preference is saved.
pub const PREFERRED_VOICES: [&str; 6] = [
    "Microsoft Aria Online (Natural) - English (United States)",
    "Microsoft Jenny Online (Natural) - English (United States)",
    "Microsoft Guy Online (Natural) - English (United States)",
    "Google US English",
    "Google UK English Female",
    "Google UK English Male",
];

/// Keep English voices when any exist, sorted by name.
pub fn sort_voices(voices: Vec<VoiceInfo>) -> Vec<VoiceInfo> {
    let english: Vec<VoiceInfo> = voices
        .iter()
        .filter(|v| v.lang.starts_with("en"))
        .cloned()
        .collect();
    let mut result = if english.is_empty() { voices } else { english };
    result.sort_by(|a, b| a.name.cmp(&b.name));
    result
}

/// Pick the voice to speak with from an already-sorted list.
pub fn choose_voice<'a>(available: &'a [VoiceInfo], saved: Option<&str>) -> Option<&'a VoiceInfo> {
    if let Some(name) = saved {
        if let Some(voice) = available.iter().find(|v| v.name == name) {
            return Some(voice);
        }
    }
    for name in PREFERRED_VOICES {
        if let Some(voice) = available.iter().find(|v| v.name == name) {
            return Some(voice);
        }
    }
    available
        .iter()
        .find(|v| v.name.contains("Microsoft") || v.name.contains("Google"))
        .or_else(|| available.first())
}
