use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;

const CRATE_TARGET: &str = "musajjil";

/// Which levels one output accepts. Events from other crates never pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    DebugOnly,
    WarnAndError,
    InfoAndAbove,
    ErrorOnly,
}

impl LevelBand {
    pub fn accepts(
        self,
        level: &Level,
    ) -> bool {
        match self {
            LevelBand::DebugOnly => *level == Level::DEBUG,
            LevelBand::WarnAndError => *level == Level::WARN || *level == Level::ERROR,
            LevelBand::InfoAndAbove => *level <= Level::INFO,
            LevelBand::ErrorOnly => *level == Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OwnTargetFilter {
    band: LevelBand,
}

impl OwnTargetFilter {
    pub fn new(band: LevelBand) -> Self {
        Self { band }
    }

    fn allows(
        &self,
        meta: &Metadata<'_>,
    ) -> bool {
        meta.target().starts_with(CRATE_TARGET) && self.band.accepts(meta.level())
    }
}

impl<S> Filter<S> for OwnTargetFilter {
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        self.allows(meta)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(LevelBand::DebugOnly, Level::DEBUG, true)]
    #[case(LevelBand::DebugOnly, Level::INFO, false)]
    #[case(LevelBand::DebugOnly, Level::TRACE, false)]
    #[case(LevelBand::WarnAndError, Level::WARN, true)]
    #[case(LevelBand::WarnAndError, Level::ERROR, true)]
    #[case(LevelBand::WarnAndError, Level::INFO, false)]
    #[case(LevelBand::InfoAndAbove, Level::INFO, true)]
    #[case(LevelBand::InfoAndAbove, Level::ERROR, true)]
    #[case(LevelBand::InfoAndAbove, Level::DEBUG, false)]
    #[case(LevelBand::ErrorOnly, Level::ERROR, true)]
    #[case(LevelBand::ErrorOnly, Level::WARN, false)]
    fn bands(
        #[case] band: LevelBand,
        #[case] level: Level,
        #[case] expected: bool,
    ) {
        assert_eq!(band.accepts(&level), expected);
    }
}
