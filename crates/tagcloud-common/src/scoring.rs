use crate::error::CloudError;
use crate::types::FontScale;

/// Integer font size for a word: min + (max - min) * count / max_count, floored.
///
/// A word at `max_count` lands exactly on `scale.max`; since counts start at
/// one, nothing falls below `scale.min`. 64-bit intermediates, no floats.
pub fn font_size(count: u32, max_count: u32, scale: FontScale) -> Result<u32, CloudError> {
    if max_count == 0 || scale.min > scale.max || count > max_count {
        return Err(CloudError::InvalidScale {
            count,
            max_count,
            min_font: scale.min,
            max_font: scale.max,
        });
    }
    let span = (scale.max - scale.min) as u64;
    let step = span * count as u64 / max_count as u64;
    Ok(scale.min + step as u32)
}
