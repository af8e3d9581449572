//! Defines the `MoonPhase` enum, mapping the provider's lunar phase names
//! to the eight canonical phases and their display glyphs.

use std::fmt;

/// Glyph shown for phase names that are not one of the eight canonical phases.
pub const DEFAULT_GLYPH: &str = "🌙";

/// One of the eight canonical lunar phases, in cycle order.
///
/// The provider reports the phase as free text (`astro.moon_phase`). Use
/// [`MoonPhase::parse`] to resolve such a name; the comparison ignores ASCII case.
///
/// # Examples
///
/// ```
/// use astrodash::MoonPhase;
///
/// assert_eq!(MoonPhase::parse("full moon"), Some(MoonPhase::FullMoon));
/// assert_eq!(MoonPhase::FullMoon.glyph(), "🌕");
/// assert_eq!(MoonPhase::parse("Blue Moon"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order, starting at the new moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Resolves a phase name case-insensitively. Returns `None` for anything
    /// that is not one of the eight canonical names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.name().eq_ignore_ascii_case(name))
    }

    /// The canonical name as the provider spells it.
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::FullMoon => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Glyph for a raw phase name. Total: unknown or absent names get [`DEFAULT_GLYPH`].
pub fn moon_glyph(phase: Option<&str>) -> &'static str {
    phase
        .and_then(MoonPhase::parse)
        .map_or(DEFAULT_GLYPH, |phase| phase.glyph())
}
