//! One-time demo-data population
//!
//! `initialize()` fills every collection with plausible league data the
//! first time it runs; the `initialized` flag makes re-runs a no-op. The
//! random generation here has no correctness contract beyond producing
//! believable demo records, and nothing outside seeding uses it.

use super::models::*;
use super::schema::{LeagueDatabase, StoreKey};
use crate::error::Result;
use crate::store::ids::{MatchId, PlayerId, SportId, TeamId, UserId};
use chrono::{Duration, NaiveTime, TimeZone, Utc};
use rand::Rng;
use tracing::{debug, info};

/// Static configuration of the fixed sport set: canonical team names and
/// the positions a player may hold in that sport.
pub struct SportConfig {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub teams: &'static [&'static str],
    pub positions: &'static [&'static str],
}

pub static SPORTS_CONFIG: [SportConfig; 4] = [
    SportConfig {
        id: 1,
        name: "Cricket",
        icon: "fas fa-baseball-ball",
        color: "#10b981",
        teams: &[
            "Mumbai Indians",
            "Chennai Super Kings",
            "Royal Challengers Bangalore",
            "Delhi Capitals",
            "Kolkata Knight Riders",
            "Rajasthan Royals",
            "Punjab Kings",
            "Sunrisers Hyderabad",
            "Lucknow Super Giants",
            "Gujarat Titans",
            "Mumbai Heroes",
            "Chennai Warriors",
            "Bangalore Challengers",
            "Delhi Daredevils",
            "Kolkata Tigers",
        ],
        positions: &["Batsman", "Bowler", "All-rounder", "Wicket-keeper"],
    },
    SportConfig {
        id: 2,
        name: "Football",
        icon: "fas fa-futbol",
        color: "#3b82f6",
        teams: &[
            "Mumbai City FC",
            "Bengaluru FC",
            "ATK Mohun Bagan",
            "FC Goa",
            "Hyderabad FC",
            "Jamshedpur FC",
            "Kerala Blasters",
            "NorthEast United",
            "Odisha FC",
            "Punjab FC",
            "Chennai City FC",
            "Delhi Dynamos",
            "Pune Warriors",
            "Kochi Tuskers",
            "Ahmedabad United",
        ],
        positions: &["Forward", "Midfielder", "Defender", "Goalkeeper"],
    },
    SportConfig {
        id: 3,
        name: "Basketball",
        icon: "fas fa-basketball-ball",
        color: "#f59e0b",
        teams: &[
            "Mumbai Ballers",
            "Delhi Hoopers",
            "Bengaluru Beasts",
            "Chennai Slammers",
            "Hyderabad Hawks",
            "Kolkata Knights",
            "Punjab Panthers",
            "Goa Giants",
            "Rajasthan Riders",
            "Gujarat Gladiators",
            "Lucknow Lakers",
            "Ahmedabad Aces",
            "Jaipur Jumpers",
            "Chandigarh Chiefs",
            "Kochi Kings",
        ],
        positions: &[
            "Point Guard",
            "Shooting Guard",
            "Small Forward",
            "Power Forward",
            "Center",
        ],
    },
    SportConfig {
        id: 4,
        name: "Volleyball",
        icon: "fas fa-volleyball-ball",
        color: "#ef4444",
        teams: &[
            "Mumbai Spikes",
            "Chennai Smashers",
            "Bengaluru Blockers",
            "Delhi Diggers",
            "Kolkata Crushers",
            "Hyderabad Hitters",
            "Punjab Power",
            "Goa Guardians",
            "Rajasthan Rockets",
            "Gujarat Gators",
            "Kerala Killers",
            "Tamil Nadu Titans",
            "Karnataka Kings",
            "Andhra Aces",
            "Odisha Olympians",
        ],
        positions: &[
            "Setter",
            "Outside Hitter",
            "Middle Blocker",
            "Opposite Hitter",
            "Libero",
            "Defensive Specialist",
        ],
    },
];

/// Valid positions for a sport, if the sport exists.
pub fn positions_for(sport_id: SportId) -> Option<&'static [&'static str]> {
    SPORTS_CONFIG
        .iter()
        .find(|config| config.id == sport_id.as_u32())
        .map(|config| config.positions)
}

static MATCH_VENUES: [&str; 15] = [
    "Wankhede Stadium, Mumbai",
    "M. Chinnaswamy Stadium, Bengaluru",
    "Eden Gardens, Kolkata",
    "Feroz Shah Kotla, Delhi",
    "MA Chidambaram Stadium, Chennai",
    "Rajiv Gandhi Stadium, Hyderabad",
    "Sardar Patel Stadium, Ahmedabad",
    "IS Bindra Stadium, Mohali",
    "Sawai Mansingh Stadium, Jaipur",
    "Brabourne Stadium, Mumbai",
    "DY Patil Stadium, Mumbai",
    "Nehru Stadium, Kochi",
    "Barabati Stadium, Cuttack",
    "Green Park Stadium, Kanpur",
    "Holkar Stadium, Indore",
];

static PLAYER_NAMES: [&str; 63] = [
    "Virat Kohli",
    "MS Dhoni",
    "Rohit Sharma",
    "KL Rahul",
    "Hardik Pandya",
    "Jasprit Bumrah",
    "Ravindra Jadeja",
    "Rishabh Pant",
    "Shikhar Dhawan",
    "Bhuvneshwar Kumar",
    "Yuzvendra Chahal",
    "Mohammed Shami",
    "Ajinkya Rahane",
    "Cheteshwar Pujara",
    "Ravichandran Ashwin",
    "Umesh Yadav",
    "Kuldeep Yadav",
    "Dinesh Karthik",
    "Shreyas Iyer",
    "Ishan Kishan",
    "Prithvi Shaw",
    "Devdutt Padikkal",
    "Ruturaj Gaikwad",
    "Sanju Samson",
    "Nitish Rana",
    "Suryakumar Yadav",
    "Deepak Hooda",
    "Axar Patel",
    "Washington Sundar",
    "Shardul Thakur",
    "Prasidh Krishna",
    "Arshdeep Singh",
    "Avesh Khan",
    "Harshal Patel",
    "Varun Chakravarthy",
    "Ravi Bishnoi",
    "Mukesh Kumar",
    "Tilak Varma",
    "Abhishek Sharma",
    "Riyan Parag",
    "Ayush Badoni",
    "Rahul Dravid",
    "Sourav Ganguly",
    "VVS Laxman",
    "Anil Kumble",
    "Kapil Dev",
    "Sunil Gavaskar",
    "Mohammad Azharuddin",
    "Javagal Srinath",
    "Venkatesh Prasad",
    "Zaheer Khan",
    "Harbhajan Singh",
    "Sandeep Lamichhane",
    "Yuvraj Singh",
    "Adam Gilchrist",
    "Kane Williamson",
    "Ross Taylor",
    "Martin Guptill",
    "Trent Boult",
    "Tim Southee",
    "Colin de Grandhomme",
    "Mitchell Santner",
    "Lockie Ferguson",
];

impl LeagueDatabase {
    /// Whether seeding has already run against this database.
    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.read_key(StoreKey::Initialized)?.as_deref() == Some("true"))
    }

    /// Populate every collection with demo data. Idempotent: once the
    /// `initialized` flag is set, re-running changes nothing.
    pub fn initialize(&mut self) -> Result<()> {
        if self.is_initialized()? {
            debug!("database already initialized");
            return Ok(());
        }
        info!("initializing league database");

        self.seed_users()?;
        self.seed_sports()?;
        self.seed_teams()?;
        self.seed_players()?;
        self.seed_matches()?;
        self.set_bookings(&[])?;

        self.write_key(StoreKey::Initialized, "true")?;
        info!("league database initialized");
        Ok(())
    }

    fn seed_users(&mut self) -> Result<()> {
        let now = Utc::now();
        let users = [
            User {
                id: UserId::new(1),
                username: "admin".to_string(),
                password: "admin123".to_string(),
                email: "admin@fanconnect.com".to_string(),
                role: Role::Admin,
                created_at: now,
                last_login: None,
            },
            User {
                id: UserId::new(2),
                username: "user1".to_string(),
                password: "user123".to_string(),
                email: "user1@example.com".to_string(),
                role: Role::User,
                created_at: now,
                last_login: None,
            },
            User {
                id: UserId::new(3),
                username: "manager1".to_string(),
                password: "manager123".to_string(),
                email: "manager1@fanconnect.com".to_string(),
                role: Role::Manager,
                created_at: now,
                last_login: None,
            },
        ];
        self.set_users(&users)
    }

    fn seed_sports(&mut self) -> Result<()> {
        let sports: Vec<Sport> = SPORTS_CONFIG
            .iter()
            .map(|config| Sport {
                id: SportId::new(config.id),
                name: config.name.to_string(),
                icon: config.icon.to_string(),
                color: config.color.to_string(),
                total_teams: config.teams.len() as u32,
                total_players: (config.teams.len() * crate::MAX_SQUAD_SIZE) as u32,
                created_at: Utc::now(),
            })
            .collect();
        self.set_sports(&sports)
    }

    fn seed_teams(&mut self) -> Result<()> {
        let mut rng = rand::thread_rng();
        let mut teams = Vec::new();
        let mut team_id = 1;

        for config in &SPORTS_CONFIG {
            for name in config.teams {
                let won = rng.gen_range(0..8);
                let drawn = rng.gen_range(0..3);
                teams.push(Team {
                    id: TeamId::new(team_id),
                    name: name.to_string(),
                    sport: config.name.to_string(),
                    sport_id: SportId::new(config.id),
                    played: rng.gen_range(0..12),
                    won,
                    lost: rng.gen_range(0..6),
                    drawn,
                    goals_for: rng.gen_range(0..25),
                    goals_against: rng.gen_range(0..20),
                    points: won * 3 + drawn,
                    founded: 2020 + rng.gen_range(0..4),
                    created_at: Utc::now(),
                });
                team_id += 1;
            }
        }
        self.set_teams(&teams)
    }

    fn seed_players(&mut self) -> Result<()> {
        let mut rng = rand::thread_rng();
        let teams = self.teams()?;
        let mut players = Vec::new();
        let mut player_id = 1;

        for team in &teams {
            let positions = positions_for(team.sport_id).unwrap_or(&[]);
            for i in 0..crate::MAX_SQUAD_SIZE {
                let name = PLAYER_NAMES[rng.gen_range(0..PLAYER_NAMES.len())];
                let position = positions[rng.gen_range(0..positions.len())];
                // Suffix A..K keeps repeated pool names distinct within a team
                let suffix = (b'A' + i as u8) as char;
                let joined = Utc
                    .with_ymd_and_hms(2022, rng.gen_range(1..=12), rng.gen_range(1..=28), 0, 0, 0)
                    .single()
                    .unwrap_or_else(Utc::now);

                players.push(Player {
                    id: PlayerId::new(player_id),
                    name: format!("{} {}", name, suffix),
                    team_id: team.id,
                    team_name: team.name.clone(),
                    sport: team.sport.clone(),
                    position: position.to_string(),
                    age: 18 + rng.gen_range(0..15),
                    nationality: if rng.gen_bool(0.3) {
                        "International".to_string()
                    } else {
                        "Indian".to_string()
                    },
                    matches_played: rng.gen_range(0..25),
                    goals: rng.gen_range(0..20),
                    assists: rng.gen_range(0..15),
                    yellow_cards: rng.gen_range(0..5),
                    red_cards: rng.gen_range(0..2),
                    rating: format!("{:.1}", 7.0 + rng.gen::<f64>() * 3.0),
                    joined_date: joined,
                    created_at: Utc::now(),
                });
                player_id += 1;
            }
        }
        self.set_players(&players)
    }

    fn seed_matches(&mut self) -> Result<()> {
        let mut rng = rand::thread_rng();
        let teams = self.teams()?;
        let now = Utc::now();
        let mut matches = Vec::new();
        let mut match_id = 1;

        // Past matches, already completed
        for _ in 0..30 {
            let config = &SPORTS_CONFIG[rng.gen_range(0..SPORTS_CONFIG.len())];
            let (team1, team2) = pick_two(&mut rng, &teams, config.id);
            let date = now - Duration::days(rng.gen_range(1..=60));
            let result = weighted_outcome(&mut rng, &team1.name, &team2.name);

            matches.push(Match {
                id: MatchId::new(match_id),
                sport: config.name.to_string(),
                sport_id: SportId::new(config.id),
                team1: team1.name.clone(),
                team1_id: team1.id,
                team2: team2.name.clone(),
                team2_id: team2.id,
                date,
                venue: MATCH_VENUES[rng.gen_range(0..MATCH_VENUES.len())].to_string(),
                result: Some(result),
                status: MatchStatus::Completed,
                attendance: Some(15_000 + rng.gen_range(0..35_000)),
                ticket_price: crate::TICKET_PRICE,
                created_at: now,
            });
            match_id += 1;
        }

        // Upcoming matches, afternoon/evening kickoffs
        for _ in 0..50 {
            let config = &SPORTS_CONFIG[rng.gen_range(0..SPORTS_CONFIG.len())];
            let (team1, team2) = pick_two(&mut rng, &teams, config.id);
            let day = (now + Duration::days(rng.gen_range(1..=90))).date_naive();
            let kickoff = day.and_time(NaiveTime::MIN)
                + Duration::hours(rng.gen_range(15..21))
                + Duration::minutes(if rng.gen_bool(0.5) { 0 } else { 30 });

            matches.push(Match {
                id: MatchId::new(match_id),
                sport: config.name.to_string(),
                sport_id: SportId::new(config.id),
                team1: team1.name.clone(),
                team1_id: team1.id,
                team2: team2.name.clone(),
                team2_id: team2.id,
                date: Utc.from_utc_datetime(&kickoff),
                venue: MATCH_VENUES[rng.gen_range(0..MATCH_VENUES.len())].to_string(),
                result: None,
                status: MatchStatus::Upcoming,
                attendance: None,
                ticket_price: crate::TICKET_PRICE,
                created_at: now,
            });
            match_id += 1;
        }

        self.set_matches(&matches)
    }
}

/// Two distinct teams of one sport.
fn pick_two<'a>(rng: &mut impl Rng, teams: &'a [Team], sport_id: u32) -> (&'a Team, &'a Team) {
    let pool: Vec<&Team> = teams
        .iter()
        .filter(|t| t.sport_id.as_u32() == sport_id)
        .collect();
    let first = pool[rng.gen_range(0..pool.len())];
    let mut second = pool[rng.gen_range(0..pool.len())];
    while second.id == first.id {
        second = pool[rng.gen_range(0..pool.len())];
    }
    (first, second)
}

/// Weighted demo outcome: 40% home win, 40% away win, 20% draw.
fn weighted_outcome(rng: &mut impl Rng, team1: &str, team2: &str) -> MatchOutcome {
    let roll: f64 = rng.gen();
    if roll < 0.4 {
        MatchOutcome::Winner(team1.to_string())
    } else if roll < 0.8 {
        MatchOutcome::Winner(team2.to_string())
    } else {
        MatchOutcome::Draw
    }
}
