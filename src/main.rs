use pokemon_field::{
    experience_yield, level_up_moves_between, BattleConfig, BattleSession, Combatant,
    EngineResult, LearnMoveResult, MoveDex, RandomSource, SpeciesDex, SpeciesSummary,
};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const MAX_TURNS: u32 = 100;
const BALL_RATE: f64 = 1.0;

/// Run a seeded wild battle between two species
#[derive(Parser, Debug)]
#[command(name = "pokemon-field")]
#[command(about = "Seeded AI-vs-AI wild battle demo", long_about = None)]
struct Args {
    /// Seed for every random draw in the battle
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Species key of the player's combatant
    #[arg(short, long, default_value = "charmander")]
    player: String,

    /// Species key of the wild combatant
    #[arg(short, long, default_value = "bulbasaur")]
    wild: String,

    /// RON file overriding the default battle tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> EngineResult<()> {
    let config = match &args.config {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::default(),
    };

    let moves = MoveDex::builtin()?;
    let species = SpeciesDex::builtin()?;
    println!("Loaded {} moves and {} species", moves.len(), species.len());

    let mut player = Combatant::new(species.get(&args.player)?, 14, None, moves)?;
    let mut wild = Combatant::new(species.get(&args.wild)?, 13, None, moves)?;
    println!("{}\n", SpeciesSummary(&player.species));
    println!("{}\n", SpeciesSummary(&wild.species));

    let mut session = BattleSession::new(moves, config, RandomSource::seeded(args.seed));
    run_battle(&mut session, &mut player, &mut wild)?;

    let record = player.to_record();
    let bytes = record.to_bytes()?;
    let restored = Combatant::from_record(record, species)?;
    println!(
        "\nSaved {} in {} bytes; restored at level {} with {}/{} HP",
        restored.name,
        bytes.len(),
        restored.level,
        restored.current_hp(),
        restored.max_hp()
    );
    Ok(())
}

fn run_battle(
    session: &mut BattleSession<'_, RandomSource<rand::rngs::StdRng>>,
    player: &mut Combatant,
    wild: &mut Combatant,
) -> EngineResult<()> {
    player.reset_for_new_battle();
    wild.reset_for_new_battle();

    println!("A wild {} appeared! Go, {}!", wild.name, player.name);
    print!("{}", session.apply_battle_entry_abilities(player, wild));

    for turn in 1..=MAX_TURNS {
        println!("\n=== Turn {} ===", turn);
        print_status(player);
        print_status(wild);

        // Throw a ball once the wild combatant is worn down
        if wild.current_hp() as u32 * 3 <= wild.max_hp() as u32 {
            println!("{} threw a Poke Ball!", player.name);
            let result = session.attempt_catch(wild, BALL_RATE);
            print_lines(&result.messages());
            if result.caught {
                return Ok(());
            }
        }

        let (Some(player_slot), Some(wild_slot)) = (
            session.choose_move(player, wild),
            session.choose_move(wild, player),
        ) else {
            println!("Someone has no moves left! The battle is over.");
            return Ok(());
        };

        let order = session.turn_order(
            player,
            player.moves[player_slot].move_id,
            wild,
            wild.moves[wild_slot].move_id,
        )?;

        for side in order.indices() {
            let (attacker, defender, slot) = if side == 0 {
                (&mut *player, &mut *wild, player_slot)
            } else {
                (&mut *wild, &mut *player, wild_slot)
            };
            if attacker.is_fainted() || defender.is_fainted() {
                continue;
            }

            let move_name = &session.move_dex().get(attacker.moves[slot].move_id)?.name;
            println!("{} used {}!", attacker.name, move_name);
            if let Some(result) = session.use_move_slot(attacker, defender, slot)? {
                print_lines(&result.messages());
            }
            if defender.is_fainted() {
                println!("{} fainted!", defender.name);
            }
        }

        for pokemon in [&mut *player, &mut *wild] {
            let result = session.apply_end_of_turn_status(pokemon);
            if result.damage > 0 {
                println!("{}", result.message());
                if pokemon.is_fainted() {
                    println!("{} fainted!", pokemon.name);
                }
            }
        }

        if wild.is_fainted() {
            award_experience(session.move_dex(), player, wild)?;
            return Ok(());
        }
        if player.is_fainted() {
            println!("{} blacked out!", player.name);
            return Ok(());
        }
    }

    println!("The battle dragged on too long. Both sides retreat.");
    Ok(())
}

fn award_experience(moves: &MoveDex, winner: &mut Combatant, defeated: &Combatant) -> EngineResult<()> {
    let exp = experience_yield(defeated);
    let from_level = winner.level;
    println!("{} gained {} EXP. Points!", winner.name, exp);

    let report = winner.grant_experience(exp);
    for level in &report.levels_reached {
        println!("{} grew to level {}!", winner.name, level);
    }

    for move_id in level_up_moves_between(&winner.species, from_level, winner.level) {
        let name = &moves.get(move_id)?.name;
        match winner.learn_move(move_id, moves)? {
            LearnMoveResult::Learned => println!("{} learned {}!", winner.name, name),
            LearnMoveResult::NoFreeSlot => {
                println!("{} wants to learn {}, but has no room.", winner.name, name)
            }
            LearnMoveResult::AlreadyKnown => {}
        }
    }

    if let Some(evolution) = winner.pending_evolution() {
        println!("{} is ready to evolve into {}!", winner.name, evolution.evolves_into_name);
    }
    Ok(())
}

fn print_status(pokemon: &Combatant) {
    let label = pokemon.status.map(|s| s.label()).unwrap_or("");
    println!(
        "  {} Lv{} {}/{} {}",
        pokemon.name,
        pokemon.level,
        pokemon.current_hp(),
        pokemon.max_hp(),
        label
    );
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
