use uuid::Uuid;

/// Short random identifier built from the first two groups of a v4 UUID.
pub fn create_id() -> String {
    return Uuid::new_v4()
        .to_string()
        .split('-')
        .enumerate()
        .filter_map(|(idx, str)| {
            if idx > 1 {
                return None;
            }
            return Some(str);
        })
        .collect::<Vec<&str>>()
        .join("-");
}
