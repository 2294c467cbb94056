//! Built-in lottery products and the catalog that holds them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::LottoError;
use crate::state::{Game, GameDefinition, Mode, Pool, PoolId, PoolRequirement};

/// The set of games offered by the marketplace. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Game>", into = "Vec<Game>")]
pub struct Catalog {
    games: Vec<Game>,
}

impl TryFrom<Vec<Game>> for Catalog {
    type Error = LottoError;

    fn try_from(games: Vec<Game>) -> Result<Self, Self::Error> {
        if games.is_empty() {
            return Err(LottoError::EmptyGame);
        }
        let mut ids = BTreeSet::new();
        if !games.iter().all(|game| ids.insert(game.id())) {
            return Err(LottoError::DuplicateId);
        }
        Ok(Self { games })
    }
}

impl From<Catalog> for Vec<Game> {
    fn from(catalog: Catalog) -> Self {
        catalog.games
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The games shipped with the application.
    pub fn builtin() -> Self {
        Self::from_definitions(builtin_definitions()).expect("built-in games are valid")
    }

    /// Validate raw definitions into a catalog.
    pub fn from_definitions(definitions: Vec<GameDefinition>) -> Result<Self, LottoError> {
        let games = definitions
            .into_iter()
            .map(Game::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(games)
    }

    /// Load a catalog from a JSON array of game definitions.
    pub fn from_json(json: &str) -> Result<Self, LottoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn find(&self, game_id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id() == game_id)
    }

    /// Look up a game, falling back to the first game when the id is stale.
    pub fn game(&self, game_id: &str) -> &Game {
        self.find(game_id).unwrap_or_else(|| self.default_game())
    }

    pub fn default_game(&self) -> &Game {
        &self.games[0]
    }
}

fn builtin_definitions() -> Vec<GameDefinition> {
    vec![
        single_pool_game(
            "lottoMax",
            "LMX",
            "standard",
            pool("lottoMax", "main", 1, 50, 2),
            vec![
                ("standard", PoolRequirement::exact(7)),
                ("combo8", PoolRequirement::exact(8).with_pick(7)),
                ("combo9", PoolRequirement::exact(9).with_pick(7)),
                ("combo10", PoolRequirement::exact(10).with_pick(7)),
            ],
        ),
        single_pool_game(
            "lotto649",
            "L649",
            "standard",
            pool("lotto649", "main", 1, 49, 2),
            vec![
                ("standard", PoolRequirement::exact(6)),
                ("combo7", PoolRequirement::exact(7).with_pick(6)),
                ("combo8", PoolRequirement::exact(8).with_pick(6)),
                ("combo9", PoolRequirement::exact(9).with_pick(6)),
            ],
        ),
        single_pool_game(
            "ontario49",
            "O49",
            "standard",
            pool("ontario49", "main", 1, 49, 2),
            vec![
                ("standard", PoolRequirement::exact(6)),
                ("combo7", PoolRequirement::exact(7).with_pick(6)),
            ],
        ),
        game(
            "dailyGrand",
            "DG",
            "standard",
            vec![
                pool("dailyGrand", "main", 1, 49, 2),
                pool("dailyGrand", "grand", 1, 7, 1),
            ],
            vec![mode("dailyGrand", "standard")
                .require(
                    "main",
                    PoolRequirement::exact(5),
                    error_key("dailyGrand", "standard", "main"),
                )
                .require(
                    "grand",
                    PoolRequirement::exact(1),
                    error_key("dailyGrand", "standard", "grand"),
                )],
        ),
        single_pool_game(
            "lightningLotto",
            "LL",
            "standard",
            pool("lightningLotto", "main", 1, 49, 2),
            vec![("standard", PoolRequirement::exact(5))],
        ),
        single_pool_game(
            "lottario",
            "LTR",
            "standard",
            pool("lottario", "main", 1, 45, 2),
            vec![
                ("standard", PoolRequirement::exact(6)),
                ("combo7", PoolRequirement::exact(7).with_pick(6)),
            ],
        ),
        keno(),
        single_pool_game(
            "pick4",
            "P4",
            "standard",
            pool("pick4", "digits", 0, 9, 1),
            vec![("standard", PoolRequirement::exact(4))],
        ),
        single_pool_game(
            "pick3",
            "P3",
            "standard",
            pool("pick3", "digits", 0, 9, 1),
            vec![("standard", PoolRequirement::exact(3))],
        ),
        double_color(),
    ]
}

/// Daily Keno: spot 2 through spot 10 from 1-70.
fn keno() -> GameDefinition {
    let modes = (2..=10)
        .map(|size| {
            let id = format!("spot{size}");
            mode("dailyKeno", &id).require(
                "main",
                PoolRequirement::exact(size),
                error_key("dailyKeno", &id, "main"),
            )
        })
        .collect();
    game(
        "dailyKeno",
        "DK",
        "spot10",
        vec![pool("dailyKeno", "main", 1, 70, 2)],
        modes,
    )
}

/// Double color ball: 6 red from 1-33 plus 1 blue from 1-16 per ticket.
/// Multi bets select more balls and expand into every 6+1 sub-ticket.
fn double_color() -> GameDefinition {
    let bet_types = [
        ("single", PoolRequirement::exact(RED_PER_TICKET), PoolRequirement::exact(BLUE_PER_TICKET)),
        (
            "redMulti",
            PoolRequirement::range(RED_MULTI_MIN, RED_MULTI_MAX).with_pick(RED_PER_TICKET),
            PoolRequirement::exact(BLUE_PER_TICKET),
        ),
        (
            "blueMulti",
            PoolRequirement::exact(RED_PER_TICKET),
            PoolRequirement::range(BLUE_MULTI_MIN, BLUE_MULTI_MAX).with_pick(BLUE_PER_TICKET),
        ),
        (
            "fullMulti",
            PoolRequirement::range(RED_MULTI_MIN, RED_MULTI_MAX).with_pick(RED_PER_TICKET),
            PoolRequirement::range(BLUE_MULTI_MIN, BLUE_MULTI_MAX).with_pick(BLUE_PER_TICKET),
        ),
    ];

    let modes = bet_types
        .into_iter()
        .map(|(id, red, blue)| {
            Mode::new(id, format!("purchase.mode.{id}"), format!("purchase.mode.rules.{id}"))
                .require("red", red, format!("purchase.mode.error.red.{id}"))
                .require("blue", blue, format!("purchase.mode.error.blue.{id}"))
        })
        .collect();

    game(
        DOUBLE_COLOR_GAME_ID,
        "DCB",
        "single",
        vec![
            pool(DOUBLE_COLOR_GAME_ID, "red", RED_BALL_START, RED_BALL_END, 2),
            pool(DOUBLE_COLOR_GAME_ID, "blue", BLUE_BALL_START, BLUE_BALL_END, 2),
        ],
        modes,
    )
}

fn game(
    id: &str,
    ticket_prefix: &str,
    default_mode_id: &str,
    pools: Vec<Pool>,
    modes: Vec<Mode>,
) -> GameDefinition {
    GameDefinition {
        id: id.to_string(),
        ticket_prefix: ticket_prefix.to_string(),
        name_key: format!("purchase.games.{id}.name"),
        description_key: format!("purchase.games.{id}.description"),
        hint_key: format!("purchase.games.{id}.hint"),
        default_mode_id: default_mode_id.to_string(),
        pools,
        modes,
    }
}

fn single_pool_game(
    id: &str,
    ticket_prefix: &str,
    default_mode_id: &str,
    pool: Pool,
    modes: Vec<(&str, PoolRequirement)>,
) -> GameDefinition {
    let pool_id = pool.id.to_string();
    let modes = modes
        .into_iter()
        .map(|(mode_id, requirement)| {
            mode(id, mode_id).require(
                PoolId::new(pool_id.as_str()),
                requirement,
                error_key(id, mode_id, &pool_id),
            )
        })
        .collect();
    game(id, ticket_prefix, default_mode_id, vec![pool], modes)
}

fn pool(game_id: &str, pool_id: &str, start: u32, end: u32, pad_to: usize) -> Pool {
    Pool {
        id: PoolId::new(pool_id),
        label_key: format!("purchase.games.{game_id}.pools.{pool_id}"),
        start,
        end,
        pad_to,
    }
}

fn mode(game_id: &str, mode_id: &str) -> Mode {
    Mode::new(
        mode_id,
        format!("purchase.games.{game_id}.modes.{mode_id}.label"),
        format!("purchase.games.{game_id}.modes.{mode_id}.helper"),
    )
}

fn error_key(game_id: &str, mode_id: &str, pool_id: &str) -> String {
    format!("purchase.games.{game_id}.modes.{mode_id}.error.{pool_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.games().iter().map(Game::id).collect();
        assert_eq!(
            ids,
            vec![
                "lottoMax",
                "lotto649",
                "ontario49",
                "dailyGrand",
                "lightningLotto",
                "lottario",
                "dailyKeno",
                "pick4",
                "pick3",
                "doubleColor",
            ]
        );
    }

    #[test]
    fn test_builtin_definitions_are_valid() {
        for definition in builtin_definitions() {
            let id = definition.id.clone();
            assert!(Game::try_from(definition).is_ok(), "invalid built-in game {id}");
        }
        assert_eq!(
            Catalog::from_definitions(builtin_definitions()).map(|catalog| catalog.games().len()),
            Ok(10)
        );
    }

    #[test]
    fn test_invalid_definition_is_reported() {
        let mut definitions = builtin_definitions();
        definitions[0].default_mode_id = "combo99".into();
        assert_eq!(
            Catalog::from_definitions(definitions),
            Err(LottoError::UnknownDefaultMode)
        );
        assert_eq!(Catalog::from_definitions(Vec::new()), Err(LottoError::EmptyGame));
    }

    #[test]
    fn test_lotto_max_combo_tiers() {
        let catalog = Catalog::builtin();
        let game = catalog.find("lottoMax").unwrap();
        let main = PoolId::from("main");
        let tiers = [("standard", 7), ("combo8", 8), ("combo9", 9), ("combo10", 10)];
        for (mode_id, selected) in tiers {
            let requirement = game.mode(mode_id).requirement(&main).unwrap();
            assert_eq!(requirement.min, selected);
            assert_eq!(requirement.ticket_size(), 7);
        }
        assert_eq!(game.ticket_prefix(), "LMX");
    }

    #[test]
    fn test_keno_spots() {
        let catalog = Catalog::builtin();
        let game = catalog.find("dailyKeno").unwrap();
        assert_eq!(game.modes().len(), 9);
        assert_eq!(game.default_mode().id, "spot10");
        assert_eq!(
            game.mode("spot4").error_key(&PoolId::from("main")),
            Some("purchase.games.dailyKeno.modes.spot4.error.main")
        );
    }

    #[test]
    fn test_double_color_shapes() {
        let catalog = Catalog::builtin();
        let game = catalog.find(DOUBLE_COLOR_GAME_ID).unwrap();
        let red = PoolId::from("red");
        let blue = PoolId::from("blue");

        let full = game.mode("fullMulti");
        assert_eq!(full.requirement(&red), Some(&PoolRequirement::range(7, 20).with_pick(6)));
        assert_eq!(full.requirement(&blue), Some(&PoolRequirement::range(2, 16).with_pick(1)));
        assert_eq!(full.error_key(&red), Some("purchase.mode.error.red.fullMulti"));
    }

    #[test]
    fn test_stale_game_falls_back_to_first() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.game("powerball").id(), "lottoMax");
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(Catalog::from_json("[]"), Err(LottoError::Deserialization));
    }
}
