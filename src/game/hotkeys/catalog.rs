// Default hotkey bindings

use super::event::{HotKeyCategory, HotKeyEvent};
use crate::engine::input::Key;

/// One catalog entry: event, category, persisted name and default key
pub type CatalogEntry = (HotKeyEvent, HotKeyCategory, &'static str, Key);

/// The complete hotkey catalog with default keys.
///
/// Names are the keys of the hotkey file and must be unique.
pub fn default_hotkeys() -> Vec<CatalogEntry> {
    use HotKeyCategory::*;
    use HotKeyEvent as E;

    vec![
        (E::MainMenuNewGame, MainGame, "new game", Key::N),
        (E::MainMenuLoadGame, MainGame, "load game", Key::L),
        (E::MainMenuHighscores, MainGame, "highscores", Key::H),
        (E::MainMenuCredits, MainGame, "credits", Key::C),
        (E::MainMenuStandard, MainGame, "standard game", Key::S),
        (E::MainMenuCampaign, MainGame, "campaign game", Key::C),
        (E::MainMenuMulti, MainGame, "multi-player game", Key::M),
        (E::MainMenuSettings, MainGame, "settings", Key::T),
        (E::MainMenuSelectMap, MainGame, "select map", Key::S),
        (E::MainMenuMapSizeSmall, MainGame, "select small map size", Key::S),
        (E::MainMenuMapSizeMedium, MainGame, "select medium map size", Key::M),
        (E::MainMenuMapSizeLarge, MainGame, "select large map size", Key::L),
        (E::MainMenuMapSizeExtraLarge, MainGame, "select extra large map size", Key::X),
        (E::MainMenuMapSizeAll, MainGame, "select all map sizes", Key::A),
        (E::MainMenuHotseat, MainGame, "hotseat game", Key::H),
        (E::MainMenuBattleOnly, MainGame, "battle only game", Key::B),
        (
            E::MainMenuNewCampaignSelectionSuccessionWars,
            MainGame,
            "the succession wars campaign selection",
            Key::O,
        ),
        (
            E::MainMenuNewCampaignSelectionPriceOfLoyalty,
            MainGame,
            "the price of loyalty campaign selection",
            Key::E,
        ),
        (E::NewRolandCampaign, MainGame, "roland campaign", Key::Key1),
        (E::NewArchibaldCampaign, MainGame, "archibald campaign", Key::Key2),
        (E::NewPriceOfLoyaltyCampaign, MainGame, "the price of loyalty campaign", Key::Key1),
        (E::NewVoyageHomeCampaign, MainGame, "voyage home campaign", Key::Key2),
        (E::NewWizardsIsleCampaign, MainGame, "wizard's isle campaign", Key::Key3),
        (E::NewDescendantsCampaign, MainGame, "descendants campaign", Key::Key4),
        // Default actions
        (E::DefaultReady, DefaultEvents, "default okay event", Key::Return),
        (E::DefaultExit, DefaultEvents, "default cancel event", Key::Escape),
        (E::DefaultLeft, DefaultEvents, "left selection", Key::None),
        (E::DefaultRight, DefaultEvents, "right selection", Key::None),
        (E::MoveLeft, DefaultEvents, "move left", Key::Left),
        (E::MoveRight, DefaultEvents, "move right", Key::Right),
        (E::MoveTop, DefaultEvents, "move up", Key::Up),
        (E::MoveBottom, DefaultEvents, "move bottom", Key::Down),
        (E::MoveTopLeft, DefaultEvents, "move top bottom", Key::None),
        (E::MoveTopRight, DefaultEvents, "move top right", Key::None),
        (E::MoveBottomLeft, DefaultEvents, "move bottom left", Key::None),
        (E::MoveBottomRight, DefaultEvents, "move bottom right", Key::None),
        (E::SystemFullscreen, DefaultEvents, "toggle fullscreen", Key::F4),
        // Battle
        (E::BattleRetreat, Battle, "retreat from battle", Key::R),
        (E::BattleSurrender, Battle, "surrender during battle", Key::S),
        (E::BattleAutoswitch, Battle, "toggle battle auto mode", Key::A),
        (E::BattleOptions, Battle, "battle options", Key::O),
        (E::BattleSkip, Battle, "skip turn in battle", Key::Space),
        (E::BattleWait, Battle, "wait in battle", Key::W),
        // World map
        (E::SaveGame, WorldMap, "save game", Key::S),
        (E::NextHero, WorldMap, "next hero", Key::H),
        (E::ContinueHeroMovement, WorldMap, "continue hero movement", Key::M),
        (E::CastSpell, WorldMap, "cast spell", Key::C),
        (E::SleepHero, WorldMap, "put hero to sleep", Key::Z),
        (E::NextTown, WorldMap, "next town", Key::T),
        (E::EndTurn, WorldMap, "end turn", Key::E),
        (E::FileOptions, WorldMap, "file options", Key::F),
        (E::SystemOptions, WorldMap, "system options", Key::O),
        (E::PuzzleMap, WorldMap, "puzzle map", Key::P),
        (E::ScenarioInformation, WorldMap, "scenario information", Key::I),
        (E::DigArtifact, WorldMap, "dig for artifact", Key::D),
        (E::KingdomSummary, WorldMap, "kingdom summary", Key::K),
        (E::ViewWorld, WorldMap, "view world", Key::V),
        (E::DefaultAction, WorldMap, "default action", Key::Space),
        (E::OpenFocus, WorldMap, "open focus", Key::Return),
        (E::ControlPanel, WorldMap, "control panel", Key::Key1),
        (E::ShowRadar, WorldMap, "show radar", Key::Key2),
        (E::ShowButtons, WorldMap, "show game buttons", Key::Key3),
        (E::ShowStatus, WorldMap, "show status", Key::Key4),
        (E::ShowIcons, WorldMap, "show icons", Key::Key5),
        (E::ScrollLeft, WorldMap, "scroll left", Key::Kp4),
        (E::ScrollRight, WorldMap, "scroll right", Key::Kp6),
        (E::ScrollUp, WorldMap, "scroll up", Key::Kp8),
        (E::ScrollDown, WorldMap, "scroll down", Key::Kp2),
        // Monster
        (E::SplitStackByHalf, Monster, "split stack by half", Key::Shift),
        (E::SplitStackByOne, Monster, "split stack by one", Key::Control),
        (E::JoinStacks, Monster, "join stacks", Key::Alt),
        (E::UpgradeTroop, Monster, "upgrade troop", Key::U),
        (E::DismissTroop, Monster, "dismiss troop", Key::D),
        // Castle
        (E::TownDwellingLevel1, Castle, "town dwelling level 1", Key::Key1),
        (E::TownDwellingLevel2, Castle, "town dwelling level 2", Key::Key2),
        (E::TownDwellingLevel3, Castle, "town dwelling level 3", Key::Key3),
        (E::TownDwellingLevel4, Castle, "town dwelling level 4", Key::Key4),
        (E::TownDwellingLevel5, Castle, "town dwelling level 5", Key::Key5),
        (E::TownDwellingLevel6, Castle, "town dwelling level 6", Key::Key6),
        (E::TownWell, Castle, "well", Key::W),
        (E::TownMageGuild, Castle, "mage guild", Key::S),
        (E::TownMarketplace, Castle, "marketplace", Key::M),
        (E::TownThievesGuild, Castle, "thieves guild", Key::T),
        (E::TownShipyard, Castle, "shipyard", Key::N),
        (E::TownTavern, Castle, "tavern", Key::R),
        // Also builds the castle in a town without one
        (E::TownJumpToBuildSelection, Castle, "castle construction", Key::B),
        (E::WellBuyAllCreatures, Castle, "buy all monsters in well", Key::M),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_event() {
        let catalog = default_hotkeys();
        assert_eq!(catalog.len(), HotKeyEvent::COUNT);

        let events: HashSet<HotKeyEvent> = catalog.iter().map(|(e, _, _, _)| *e).collect();
        assert_eq!(events.len(), HotKeyEvent::COUNT);
    }

    #[test]
    fn test_no_empty_names() {
        for (event, _, name, _) in default_hotkeys() {
            assert!(!name.is_empty(), "{:?} has no name", event);
        }
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut seen = HashSet::new();
        for (_, _, name, _) in default_hotkeys() {
            assert!(seen.insert(name), "Duplicate hotkey name '{}'", name);
        }
    }

    #[test]
    fn test_fullscreen_default() {
        let entry = default_hotkeys()
            .into_iter()
            .find(|(event, _, _, _)| *event == HotKeyEvent::SystemFullscreen);
        assert!(matches!(
            entry,
            Some((_, HotKeyCategory::DefaultEvents, "toggle fullscreen", Key::F4))
        ));
    }
}
