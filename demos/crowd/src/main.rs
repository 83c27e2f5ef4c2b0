//! crowd: two groups crossing a walled room through each other.
//!
//! The east group spawns along the west wall and walks toward the east wall;
//! the west group does the opposite.  A band of workers idles in the middle
//! inside small working areas and gets pushed aside as the crowds pass, and a
//! few parked agents never move.  A swamp patch raises cell costs without
//! blocking anything.
//!
//! Set `RUST_LOG=debug` for per-cycle resolver summaries.

use std::collections::HashSet;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tm_agent::AgentStore;
use tm_core::{AgentId, AgentRng, Cell, Cycle, ResolverConfig, TmResult};
use tm_resolve::Move;
use tm_sim::{CycleObserver, CycleTotals, TrafficManagerBuilder};
use tm_terrain::{CostMatrix, TerrainGrid};

// ── Constants ─────────────────────────────────────────────────────────────────

const WALKERS_PER_SIDE: usize = 60;
const WORKERS:          usize = 30;
const PARKED:           usize = 6;
const CYCLES:           u64   = 80;
const SEED:             u64   = 42;
const REPORT_EVERY:     u64   = 10;

// ── Roles ─────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
enum Role {
    /// Walks toward a goal cell one step per cycle.
    Walker { goal: Cell },
    /// Stays put unless pushed, preferring to stay near its post.
    Worker { post: Cell },
    Parked,
}

// ── Observer ──────────────────────────────────────────────────────────────────

struct Progress {
    totals:  CycleTotals,
    arrived: usize,
    goals:   Vec<Option<Cell>>,
}

impl CycleObserver for Progress {
    fn on_resolved(&mut self, cycle: Cycle, report: &tm_resolve::ResolveReport) {
        self.totals.on_resolved(cycle, report);
    }

    fn on_moves(&mut self, _cycle: Cycle, moves: &[Move]) {
        self.arrived += moves
            .iter()
            .filter(|m| self.goals[m.agent.index()] == Some(m.to))
            .count();
    }

    fn on_cycle_end(&mut self, cycle: Cycle, _agents: &AgentStore) {
        if (cycle.0 + 1) % REPORT_EVERY == 0 {
            info!(
                %cycle,
                arrived   = self.arrived,
                satisfied = self.totals.satisfied,
                pending   = self.totals.pending,
                "progress",
            );
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

fn build_terrain() -> Result<TerrainGrid> {
    let swamp = ["~~~~~~"; 8];
    let grid = TerrainGrid::walled()
        .paint(Cell::new(22, 4), &swamp)
        .context("painting swamp")?
        .paint(Cell::new(24, 20), &["#", "#", "#", "#", "#", "#", "#", "#", "#", "#"])
        .context("painting pillar")?;
    Ok(grid)
}

/// Distinct random cells with `x` in `xs` and `y` in `2..48`, avoiding `taken`.
fn scatter(
    rng:   &mut AgentRng,
    count: usize,
    xs:    std::ops::Range<u8>,
    grid:  &TerrainGrid,
    taken: &mut HashSet<Cell>,
) -> Vec<Cell> {
    use tm_terrain::Terrain;

    let mut cells = Vec::with_capacity(count);
    while cells.len() < count {
        let cell = Cell::new(rng.gen_range(xs.clone()), rng.gen_range(2..48));
        if grid.is_passable(cell) && taken.insert(cell) {
            cells.push(cell);
        }
    }
    cells
}

fn plan(cycle: Cycle, agents: &mut AgentStore, roles: &[Role]) -> TmResult<()> {
    for (i, role) in roles.iter().enumerate() {
        let agent = AgentId(i as u32);
        let here = agents.current_cell[i];
        match *role {
            Role::Walker { goal } if here != goal => {
                agents.register_move(agent, goal)?;
            }
            Role::Walker { .. } => {}
            Role::Worker { post } => agents.set_working_area(agent, post, 2)?,
            Role::Parked => agents.set_obstacle(agent, true)?,
        }
    }
    if cycle == Cycle::ZERO {
        info!(agents = roles.len(), "first cycle planned");
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to create log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    println!("=== crowd — traffic manager demo ===");
    println!(
        "Walkers: {} per side  |  Workers: {WORKERS}  |  Parked: {PARKED}  |  Cycles: {CYCLES}",
        WALKERS_PER_SIDE
    );
    println!();

    // 1. Terrain and costs.
    let terrain = build_terrain()?;
    let costs = CostMatrix::from_terrain(&terrain);
    println!("Terrain: {} wall tiles", terrain.wall_count());

    // 2. Spawn cells and roles.
    let mut rng = AgentRng::new(SEED, AgentId::INVALID);
    let mut taken = HashSet::new();
    let mut cells = Vec::new();
    let mut roles = Vec::new();

    let east = scatter(&mut rng, WALKERS_PER_SIDE, 2..8, &terrain, &mut taken);
    let west = scatter(&mut rng, WALKERS_PER_SIDE, 42..48, &terrain, &mut taken);
    let workers = scatter(&mut rng, WORKERS, 18..32, &terrain, &mut taken);
    let parked = scatter(&mut rng, PARKED, 18..32, &terrain, &mut taken);

    for cell in east {
        roles.push(Role::Walker { goal: Cell::new(47 - (cell.x - 2), cell.y) });
        cells.push(cell);
    }
    for cell in west {
        roles.push(Role::Walker { goal: Cell::new(2 + (47 - cell.x), cell.y) });
        cells.push(cell);
    }
    for cell in workers {
        roles.push(Role::Worker { post: cell });
        cells.push(cell);
    }
    for cell in parked {
        roles.push(Role::Parked);
        cells.push(cell);
    }

    let goals: Vec<Option<Cell>> = roles
        .iter()
        .map(|r| match r {
            Role::Walker { goal } => Some(*goal),
            _ => None,
        })
        .collect();
    let walkers = goals.iter().flatten().count();

    // 3. Traffic manager.
    let config = ResolverConfig { seed: SEED, ..Default::default() };
    let mut tm = TrafficManagerBuilder::new(terrain)
        .config(config)
        .costs(costs)
        .spawn_all(cells)
        .build()?;

    // 4. Run.
    let mut progress = Progress { totals: CycleTotals::default(), arrived: 0, goals };
    let t0 = Instant::now();
    let moved = tm.run_cycles(CYCLES, |cycle, agents| plan(cycle, agents, &roles), &mut progress)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    let at_goal = tm
        .agents
        .agent_ids()
        .filter(|a| progress.goals[a.index()] == Some(tm.agents.current_cell[a.index()]))
        .count();
    let totals = &progress.totals;

    println!("Completed {} cycles in {:.3} s", totals.cycles, elapsed.as_secs_f64());
    println!("  moves applied     : {moved}");
    println!("  pending intents   : {}", totals.pending);
    println!("  satisfied intents : {}", totals.satisfied);
    println!("  searches          : {} ({} improved)", totals.searched, totals.improved);
    println!("  walkers at goal   : {at_goal} / {walkers}");

    Ok(())
}
