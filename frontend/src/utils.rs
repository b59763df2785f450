/// Extracts the playlist id from the `list=` query parameter of a YouTube
/// playlist URL, e.g. `https://www.youtube.com/playlist?list=PL123...`.
pub fn extract_playlist_id(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("list="))
        .filter(|id| !id.is_empty())
        .map(String::from)
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() > max_length {
        let truncated: String = text.chars().take(max_length).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}
