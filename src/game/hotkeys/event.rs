// Hotkey event identifiers and categories

/// Groups hotkey events in the hotkey file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotKeyCategory {
    DefaultEvents,
    MainGame,
    WorldMap,
    Battle,
    Castle,
    Monster,
}

impl HotKeyCategory {
    /// Section title used in the hotkey file
    pub fn name(self) -> &'static str {
        match self {
            HotKeyCategory::DefaultEvents => "Default actions",
            HotKeyCategory::MainGame => "Main Menu",
            HotKeyCategory::WorldMap => "World Map",
            HotKeyCategory::Battle => "Battle",
            HotKeyCategory::Castle => "Castle",
            HotKeyCategory::Monster => "Monster",
        }
    }
}

/// Every user-triggerable action that can be bound to a key.
///
/// The declaration order is the catalog order: it is the order events are
/// written to the hotkey file, so events of one category stay together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotKeyEvent {
    // Main menu
    MainMenuNewGame,
    MainMenuLoadGame,
    MainMenuHighscores,
    MainMenuCredits,
    MainMenuStandard,
    MainMenuCampaign,
    MainMenuMulti,
    MainMenuSettings,
    MainMenuSelectMap,
    MainMenuMapSizeSmall,
    MainMenuMapSizeMedium,
    MainMenuMapSizeLarge,
    MainMenuMapSizeExtraLarge,
    MainMenuMapSizeAll,
    MainMenuHotseat,
    MainMenuBattleOnly,
    MainMenuNewCampaignSelectionSuccessionWars,
    MainMenuNewCampaignSelectionPriceOfLoyalty,
    NewRolandCampaign,
    NewArchibaldCampaign,
    NewPriceOfLoyaltyCampaign,
    NewVoyageHomeCampaign,
    NewWizardsIsleCampaign,
    NewDescendantsCampaign,

    // Default actions
    DefaultReady,
    DefaultExit,
    DefaultLeft,
    DefaultRight,
    MoveLeft,
    MoveRight,
    MoveTop,
    MoveBottom,
    MoveTopLeft,
    MoveTopRight,
    MoveBottomLeft,
    MoveBottomRight,
    SystemFullscreen,

    // Battle
    BattleRetreat,
    BattleSurrender,
    BattleAutoswitch,
    BattleOptions,
    BattleSkip,
    BattleWait,

    // World map
    SaveGame,
    NextHero,
    ContinueHeroMovement,
    CastSpell,
    SleepHero,
    NextTown,
    EndTurn,
    FileOptions,
    SystemOptions,
    PuzzleMap,
    ScenarioInformation,
    DigArtifact,
    KingdomSummary,
    ViewWorld,
    DefaultAction,
    OpenFocus,
    ControlPanel,
    ShowRadar,
    ShowButtons,
    ShowStatus,
    ShowIcons,
    ScrollLeft,
    ScrollRight,
    ScrollUp,
    ScrollDown,

    // Monster
    SplitStackByHalf,
    SplitStackByOne,
    JoinStacks,
    UpgradeTroop,
    DismissTroop,

    // Castle
    TownDwellingLevel1,
    TownDwellingLevel2,
    TownDwellingLevel3,
    TownDwellingLevel4,
    TownDwellingLevel5,
    TownDwellingLevel6,
    TownWell,
    TownMageGuild,
    TownMarketplace,
    TownThievesGuild,
    TownShipyard,
    TownTavern,
    TownJumpToBuildSelection,
    WellBuyAllCreatures,
}

impl HotKeyEvent {
    /// Number of hotkey events
    pub const COUNT: usize = 87;

    /// All events in catalog order
    pub const ALL: [HotKeyEvent; Self::COUNT] = [
        HotKeyEvent::MainMenuNewGame,
        HotKeyEvent::MainMenuLoadGame,
        HotKeyEvent::MainMenuHighscores,
        HotKeyEvent::MainMenuCredits,
        HotKeyEvent::MainMenuStandard,
        HotKeyEvent::MainMenuCampaign,
        HotKeyEvent::MainMenuMulti,
        HotKeyEvent::MainMenuSettings,
        HotKeyEvent::MainMenuSelectMap,
        HotKeyEvent::MainMenuMapSizeSmall,
        HotKeyEvent::MainMenuMapSizeMedium,
        HotKeyEvent::MainMenuMapSizeLarge,
        HotKeyEvent::MainMenuMapSizeExtraLarge,
        HotKeyEvent::MainMenuMapSizeAll,
        HotKeyEvent::MainMenuHotseat,
        HotKeyEvent::MainMenuBattleOnly,
        HotKeyEvent::MainMenuNewCampaignSelectionSuccessionWars,
        HotKeyEvent::MainMenuNewCampaignSelectionPriceOfLoyalty,
        HotKeyEvent::NewRolandCampaign,
        HotKeyEvent::NewArchibaldCampaign,
        HotKeyEvent::NewPriceOfLoyaltyCampaign,
        HotKeyEvent::NewVoyageHomeCampaign,
        HotKeyEvent::NewWizardsIsleCampaign,
        HotKeyEvent::NewDescendantsCampaign,
        HotKeyEvent::DefaultReady,
        HotKeyEvent::DefaultExit,
        HotKeyEvent::DefaultLeft,
        HotKeyEvent::DefaultRight,
        HotKeyEvent::MoveLeft,
        HotKeyEvent::MoveRight,
        HotKeyEvent::MoveTop,
        HotKeyEvent::MoveBottom,
        HotKeyEvent::MoveTopLeft,
        HotKeyEvent::MoveTopRight,
        HotKeyEvent::MoveBottomLeft,
        HotKeyEvent::MoveBottomRight,
        HotKeyEvent::SystemFullscreen,
        HotKeyEvent::BattleRetreat,
        HotKeyEvent::BattleSurrender,
        HotKeyEvent::BattleAutoswitch,
        HotKeyEvent::BattleOptions,
        HotKeyEvent::BattleSkip,
        HotKeyEvent::BattleWait,
        HotKeyEvent::SaveGame,
        HotKeyEvent::NextHero,
        HotKeyEvent::ContinueHeroMovement,
        HotKeyEvent::CastSpell,
        HotKeyEvent::SleepHero,
        HotKeyEvent::NextTown,
        HotKeyEvent::EndTurn,
        HotKeyEvent::FileOptions,
        HotKeyEvent::SystemOptions,
        HotKeyEvent::PuzzleMap,
        HotKeyEvent::ScenarioInformation,
        HotKeyEvent::DigArtifact,
        HotKeyEvent::KingdomSummary,
        HotKeyEvent::ViewWorld,
        HotKeyEvent::DefaultAction,
        HotKeyEvent::OpenFocus,
        HotKeyEvent::ControlPanel,
        HotKeyEvent::ShowRadar,
        HotKeyEvent::ShowButtons,
        HotKeyEvent::ShowStatus,
        HotKeyEvent::ShowIcons,
        HotKeyEvent::ScrollLeft,
        HotKeyEvent::ScrollRight,
        HotKeyEvent::ScrollUp,
        HotKeyEvent::ScrollDown,
        HotKeyEvent::SplitStackByHalf,
        HotKeyEvent::SplitStackByOne,
        HotKeyEvent::JoinStacks,
        HotKeyEvent::UpgradeTroop,
        HotKeyEvent::DismissTroop,
        HotKeyEvent::TownDwellingLevel1,
        HotKeyEvent::TownDwellingLevel2,
        HotKeyEvent::TownDwellingLevel3,
        HotKeyEvent::TownDwellingLevel4,
        HotKeyEvent::TownDwellingLevel5,
        HotKeyEvent::TownDwellingLevel6,
        HotKeyEvent::TownWell,
        HotKeyEvent::TownMageGuild,
        HotKeyEvent::TownMarketplace,
        HotKeyEvent::TownThievesGuild,
        HotKeyEvent::TownShipyard,
        HotKeyEvent::TownTavern,
        HotKeyEvent::TownJumpToBuildSelection,
        HotKeyEvent::WellBuyAllCreatures,
    ];

    /// Position of the event in catalog order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up an event by its catalog position
    pub fn from_index(index: usize) -> Option<HotKeyEvent> {
        Self::ALL.get(index).copied()
    }
}
