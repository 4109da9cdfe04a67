// charity-race-service/src/services/team_store.rs

use crate::models::{Member, MemberData, ServiceError, Team, TeamData};
use chrono::Utc;
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use uuid::Uuid;

// Fixed storage key: the whole collection lives in one file
const TEAMS_FILE: &str = "teams.json";

// Single source of truth for the team collection. Mutations build a whole
// new snapshot and write it back to the storage file before returning;
// readers clone out the current Arc snapshot and never see a half-applied
// mutation.
pub struct TeamStore {
    path: PathBuf,
    // Current snapshot; only ever replaced with a fully-built collection
    teams: RwLock<Arc<Vec<Team>>>,
    // Serializes mutations so snapshot swap + save happen as one step
    write_lock: Mutex<()>,
    // Set once the initial load has completed; saves are skipped before that
    ready: AtomicBool,
}

impl TeamStore {
    pub fn new<P: AsRef<Path>>(storage_dir: P) -> Self {
        Self {
            path: storage_dir.as_ref().join(TEAMS_FILE),
            teams: RwLock::new(Arc::new(Vec::new())),
            write_lock: Mutex::new(()),
            ready: AtomicBool::new(false),
        }
    }

    // Load the persisted collection. A missing or unreadable file starts the
    // store empty; either way the store is ready afterwards.
    pub fn load(&self) -> Result<(), ServiceError> {
        let loaded: Vec<Team> = match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(teams) => teams,
                Err(e) => {
                    warn!("Failed to parse stored teams, starting empty: {:?}", e);
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored teams, starting empty: {:?}", e);
                Vec::new()
            }
        };

        info!("Loaded {} teams from {}", loaded.len(), self.path.display());
        self.swap(Arc::new(loaded));
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    // Whether the initial load has completed
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    // Full current snapshot, in creation order
    pub fn teams(&self) -> Arc<Vec<Team>> {
        self.snapshot()
    }

    // Find a team by id. Pure read, O(n) over a small collection.
    pub fn get_team_by_id(&self, team_id: &str) -> Option<Team> {
        self.snapshot().iter().find(|t| t.id == team_id).cloned()
    }

    // Create a new team from the given data and persist the collection.
    // No validation happens here; callers validate first.
    pub fn create_team(&self, data: TeamData) -> Result<Team, ServiceError> {
        let _guard = self.mutation_guard()?;

        let team = Team {
            id: format!("team_{}", Uuid::new_v4()),
            name: data.name,
            description: data.description,
            charity_id: data.charity_id,
            charity_name: data.charity_name,
            goal_amount: data.goal_amount,
            organizer: data.organizer,
            total_raised: 0.0,
            created_at: Utc::now(),
            members: Vec::new(),
        };

        let mut next = (*self.snapshot()).clone();
        next.push(team.clone());

        let next = Arc::new(next);
        self.swap(next.clone());
        self.save(&next)?;

        debug!("Created team: {}", team.id);
        Ok(team)
    }

    // Append a member to a team, preserving join order. Unknown teams are a
    // NotFound result so callers can surface the failure.
    pub fn add_team_member(
        &self,
        team_id: &str,
        data: MemberData,
    ) -> Result<Member, ServiceError> {
        let _guard = self.mutation_guard()?;

        let mut next = (*self.snapshot()).clone();
        let team = match next.iter_mut().find(|t| t.id == team_id) {
            Some(team) => team,
            None => {
                warn!("Cannot add member, team not found: {}", team_id);
                return Err(ServiceError::NotFound);
            }
        };

        let member = Member {
            id: format!("member_{}", Uuid::new_v4()),
            full_name: data.full_name,
            email: data.email,
            joined_at: Utc::now(),
            amount_raised: 0.0,
        };
        team.members.push(member.clone());

        let next = Arc::new(next);
        self.swap(next.clone());
        self.save(&next)?;

        debug!("Added member {} to team {}", member.id, team_id);
        Ok(member)
    }

    // Record a donation against a team, and against one of its members when a
    // member id is given. Unknown team ids leave the collection untouched and
    // return Ok(None); an unknown member id skips only the member increment.
    pub fn record_donation(
        &self,
        team_id: &str,
        member_id: Option<&str>,
        amount: f64,
    ) -> Result<Option<Team>, ServiceError> {
        let _guard = self.mutation_guard()?;

        let mut next = (*self.snapshot()).clone();
        let team = match next.iter_mut().find(|t| t.id == team_id) {
            Some(team) => team,
            None => {
                warn!("Donation for unknown team ignored: {}", team_id);
                return Ok(None);
            }
        };

        team.total_raised += amount;

        if let Some(member_id) = member_id.filter(|id| !id.is_empty()) {
            match team.members.iter_mut().find(|m| m.id == member_id) {
                Some(member) => member.amount_raised += amount,
                None => warn!(
                    "Donation member {} not in team {}, member total unchanged",
                    member_id, team_id
                ),
            }
        }

        let updated = team.clone();
        let next = Arc::new(next);
        self.swap(next.clone());
        self.save(&next)?;

        info!("💰 Recorded donation of {} to team {}", amount, team_id);
        Ok(Some(updated))
    }

    // Serialize the whole collection to the storage file. Skipped until the
    // initial load has completed so an empty collection can never clobber
    // previously persisted state.
    fn save(&self, teams: &[Team]) -> Result<(), ServiceError> {
        if !self.is_ready() {
            debug!("Store not loaded yet, skipping save");
            return Ok(());
        }

        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    error!("Failed to create storage directory: {:?}", e);
                    ServiceError::InternalServerError
                })?;
            }
        }

        let json = serde_json::to_string_pretty(teams).map_err(|e| {
            error!("Failed to serialize teams: {:?}", e);
            ServiceError::InternalServerError
        })?;

        fs::write(&self.path, json).map_err(|e| {
            error!("Failed to save teams: {:?}", e);
            ServiceError::InternalServerError
        })?;

        debug!("Saved {} teams to {}", teams.len(), self.path.display());
        Ok(())
    }

    fn mutation_guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, ServiceError> {
        self.write_lock.lock().map_err(|e| {
            error!("Team store write lock poisoned: {:?}", e);
            ServiceError::InternalServerError
        })
    }

    // The pointer lock only ever guards a swap between fully-built snapshots,
    // so a poisoned guard still holds a consistent value.
    fn snapshot(&self) -> Arc<Vec<Team>> {
        self.teams
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn swap(&self, next: Arc<Vec<Team>>) {
        let mut teams = self.teams.write().unwrap_or_else(PoisonError::into_inner);
        *teams = next;
    }
}
