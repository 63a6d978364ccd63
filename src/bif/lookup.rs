use super::types::BifData;

/// Map a player position to the thumbnail stored for that frame.
///
/// `frame = player_timestamp / timestamp_multiplier`, floored. The lookup is
/// exact: a frame with no decoded image yields `None`, there is no fallback to a
/// neighbouring frame.
pub fn frame_at<I>(player_timestamp: u64, data: &BifData<I>) -> Option<&I> {
    if data.timestamp_multiplier == 0 {
        return None;
    }
    let frame = player_timestamp / u64::from(data.timestamp_multiplier);
    let frame = u32::try_from(frame).ok()?;
    data.images.get(&frame)
}
