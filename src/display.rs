//! Formatting helpers shared by every presentation of catalog data.

/// The largest possible base stat value.
pub const MAX_BASE_STAT: u8 = 255;

/// Turns an API slug into words by replacing every hyphen with a space.
pub fn humanize(slug: &str) -> String {
  slug.replace('-', " ")
}

/// Uppercases the first letter of every space-separated word.
pub fn capitalize(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut at_word_start = true;
  for c in s.chars() {
    if at_word_start {
      out.extend(c.to_uppercase());
    } else {
      out.push(c);
    }
    at_word_start = c == ' ';
  }
  out
}

/// Humanizes and capitalizes an API slug: `"special-attack"` becomes
/// `"Special Attack"`.
pub fn title(slug: &str) -> String {
  capitalize(&humanize(slug))
}

/// Formats a catalog ID as a zero-padded number, such as `#0025`.
pub fn dex_number(id: u32) -> String {
  format!("#{:04}", id)
}

/// Formats a value given in tenths as a decimal, dropping a zero fraction.
///
/// Heights come in decimetres and weights in hectograms, so this converts
/// them to metres and kilograms respectively.
pub fn decimal_tenths(tenths: u32) -> String {
  match tenths % 10 {
    0 => format!("{}", tenths / 10),
    frac => format!("{}.{}", tenths / 10, frac),
  }
}

/// Returns how full a stat bar for `value` should be, in `0.0..=1.0`.
pub fn stat_ratio(value: u8) -> f64 {
  (value as f64 / MAX_BASE_STAT as f64).min(1.0)
}

/// Replaces the game's hard line and page breaks in flavor text with spaces.
pub fn clean_flavor_text(text: &str) -> String {
  text.replace(|c: char| matches!(c, '\u{c}' | '\n' | '\r'), " ")
}
