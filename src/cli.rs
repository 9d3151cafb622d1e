// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Confirm, Select};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::catalog::{self, DEFAULT_LOCATION, DEFAULT_ROLE, DEFAULT_TOP_N};
use crate::config::AppConfig;
use crate::core::{AnalyticsApi, ServiceClient};
use crate::preferences::{Theme, ThemeStore};
use crate::report;
use crate::types::{Candidate, CsvUpload, MappingField};
use crate::utils::{export_file_path, split_list};
use crate::workflow::{DataLab, RecruiterView, SalaryView, SkillGapView, UploadStatus};

const UNSELECTED_COLUMN: &str = "Select Column Header...";

#[derive(Parser)]
#[command(name = "hrintel")]
#[command(about = "Recruitment market analytics from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the analytics backend base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a recruitment CSV, then show the market snapshot and top candidates
    Analyze {
        csv_file: PathBuf,
        #[arg(long)]
        role_column: Option<String>,
        #[arg(long)]
        salary_column: Option<String>,
        #[arg(long)]
        skills_column: Option<String>,
        #[arg(long)]
        experience_column: Option<String>,
        /// Required candidate skills (repeatable or comma separated)
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Role filter shown with the results
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        min_experience: Option<u32>,
        /// Fail instead of asking when the role column cannot be detected
        #[arg(long)]
        no_prompt: bool,
        /// Write the ranking to this CSV file or directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Predict a salary for a role, location and experience
    Predict {
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,
        #[arg(long, default_value_t = catalog::DEFAULT_EXPERIENCE_YEARS)]
        experience: u32,
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// Compare your skills with what a role requires
    SkillGap {
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
        #[arg(long = "skill")]
        skills: Vec<String>,
    },
    /// List the most frequent skills for a role
    RoleSkills {
        #[arg(long)]
        role: String,
    },
    /// Rank candidates by required skills
    Match {
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: u32,
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Print a built-in list
    Catalog {
        #[arg(value_enum)]
        list: CatalogList,
    },
    /// Show backend diagnostics
    Status,
}

#[derive(Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set { theme: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogList {
    Roles,
    Skills,
    Locations,
}

/// Column names passed on the command line for an unmapped upload.
#[derive(Default)]
struct ColumnOverrides {
    role: Option<String>,
    salary: Option<String>,
    skills: Option<String>,
    experience: Option<String>,
}

impl ColumnOverrides {
    fn get(&self, field: MappingField) -> Option<&str> {
        match field {
            MappingField::Role => self.role.as_deref(),
            MappingField::Salary => self.salary.as_deref(),
            MappingField::Skills => self.skills.as_deref(),
            MappingField::Experience => self.experience.as_deref(),
        }
    }
}

fn connect(config: &AppConfig) -> Result<ServiceClient> {
    let client = ServiceClient::new(&config.api_base, config.timeout_seconds)?;
    info!("Using analytics backend at {}", client.base_url());
    Ok(client)
}

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Command::Theme { action } => handle_theme(action, &config.state_dir),

        Command::Catalog { list } => {
            print_catalog(list);
            Ok(())
        }

        Command::Analyze {
            csv_file,
            role_column,
            salary_column,
            skills_column,
            experience_column,
            skills,
            role,
            min_experience,
            no_prompt,
            export,
        } => {
            let overrides = ColumnOverrides {
                role: role_column,
                salary: salary_column,
                skills: skills_column,
                experience: experience_column,
            };
            let mut lab = DataLab::new();
            lab.preselect_skills(&split_list(&skills));
            if let Some(role) = role {
                lab.set_role(&role);
            }
            if let Some(years) = min_experience {
                lab.set_experience(years);
            }
            let client = connect(&config)?;
            handle_analyze(&client, lab, &csv_file, &overrides, no_prompt, export).await
        }

        Command::Predict {
            role,
            location,
            experience,
            skills,
        } => {
            if !catalog::is_known_role(&role) {
                warn!("'{}' is not one of the catalog roles", role);
            }
            let client = connect(&config)?;
            let mut view = SalaryView::default();
            view.form.role = role;
            view.form.location = location;
            view.set_experience(experience);
            for skill in split_list(&skills) {
                view.toggle_skill(&skill);
            }

            view.submit(&client).await;
            if let Some(err) = view.error() {
                anyhow::bail!("Salary prediction failed: {}", err);
            }
            if let Some(value) = view.prediction() {
                println!(
                    "{}",
                    report::render_prediction(&view.form.role, &view.form.location, value)
                );
            }
            Ok(())
        }

        Command::SkillGap { role, skills } => {
            let client = connect(&config)?;
            let mut view = SkillGapView::default();
            view.set_target_role(&role);
            for skill in split_list(&skills) {
                view.toggle_skill(&skill);
            }

            view.analyze(&client).await;
            if let Some(err) = view.error() {
                anyhow::bail!("Skill gap analysis failed: {}", err);
            }
            if let Some(gap) = view.report() {
                print!("{}", report::render_skill_gap(view.target_role(), gap));
            }
            Ok(())
        }

        Command::RoleSkills { role } => {
            let client = connect(&config)?;
            let mut view = SkillGapView::default();
            view.set_target_role(&role);
            view.suggest_skills(&client).await;
            if let Some(err) = view.error() {
                anyhow::bail!("Role skill lookup failed: {}", err);
            }
            if view.suggestions().is_empty() {
                println!("No skills recorded for {}.", role);
            } else {
                println!("Top skills for {}:", role);
                for skill in view.suggestions() {
                    println!("  {}", skill);
                }
            }
            Ok(())
        }

        Command::Match {
            skills,
            top_n,
            export,
        } => {
            let client = connect(&config)?;
            let mut view = RecruiterView::default();
            view.set_top_n(top_n);
            for skill in split_list(&skills) {
                view.toggle_skill(&skill);
            }

            view.search(&client).await;
            if let Some(err) = view.error() {
                anyhow::bail!("Candidate search failed: {}", err);
            }
            print!("{}", report::render_candidates(view.candidates()));
            if let Some(target) = export {
                export_ranking(&target, view.candidates())?;
            }
            Ok(())
        }

        Command::Status => {
            let client = connect(&config)?;
            let info = client.debug_info().await.map_err(|e| {
                anyhow::anyhow!("Backend at {} is unreachable: {}", client.base_url(), e)
            })?;
            println!("Backend: {}", client.base_url());
            for (key, value) in &info {
                println!("  {}: {}", key, value);
            }
            Ok(())
        }
    }
}

async fn handle_analyze<A: AnalyticsApi>(
    api: &A,
    mut lab: DataLab,
    csv_file: &Path,
    overrides: &ColumnOverrides,
    no_prompt: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let upload = CsvUpload::from_path(csv_file).await?;
    println!("Analyzing {} ({} bytes)...", upload.file_name, upload.len());
    lab.select_file(upload);

    let mut status = lab.analyze(api).await?;

    if status == UploadStatus::MappingNeeded {
        for field in MappingField::ALL {
            if let Some(column) = overrides.get(field) {
                lab.set_mapping_field(field, column)?;
            }
        }

        if !lab.session().can_confirm() {
            if no_prompt {
                let columns = lab.session().available_columns().join(", ");
                lab.cancel_mapping()?;
                anyhow::bail!(
                    "Could not detect the job role column. Pass --role-column (available: {})",
                    columns
                );
            }
            if !prompt_mapping(&mut lab)? {
                lab.cancel_mapping()?;
                println!("Mapping cancelled.");
                return Ok(());
            }
        }

        status = lab.confirm_mapping(api).await?;
    }

    match status {
        UploadStatus::Success => {
            if let Some(market) = lab.market() {
                print!("{}", report::render_market(market, lab.demand_mix()));
            }
            let filters = lab.filters();
            println!(
                "\nTop candidates (role: {}, min experience: {}y, skills: {}):",
                filters.role,
                filters.experience,
                filters.match_skills().join(", ")
            );
            print!("{}", report::render_candidates(lab.candidates()));
            if let Some(target) = export {
                export_ranking(&target, lab.candidates())?;
            }
            Ok(())
        }
        UploadStatus::Error => anyhow::bail!(
            "Analysis failed: {}",
            lab.session().error_message().unwrap_or_default()
        ),
        other => anyhow::bail!("Analysis stopped in state '{}'", other),
    }
}

/// Ask for each column interactively. Returns false when the user gives up.
fn prompt_mapping(lab: &mut DataLab) -> Result<bool> {
    println!("We couldn't perfectly identify your column headers. Please map them below:");
    let columns = lab.session().available_columns().to_vec();
    let mut items = vec![UNSELECTED_COLUMN.to_string()];
    items.extend(columns.iter().cloned());

    loop {
        for field in MappingField::ALL {
            let current = lab.session().mapping().get(field);
            let default = columns
                .iter()
                .position(|c| c == current)
                .map(|idx| idx + 1)
                .unwrap_or(0);

            let choice = Select::new()
                .with_prompt(field.label())
                .items(&items)
                .default(default)
                .interact()
                .context("Failed to read column choice")?;

            let column = if choice == 0 {
                ""
            } else {
                columns[choice - 1].as_str()
            };
            lab.set_mapping_field(field, column)?;
        }

        if lab.session().can_confirm() {
            return Ok(true);
        }

        let retry = Confirm::new()
            .with_prompt("The job role column is required. Try again?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if !retry {
            return Ok(false);
        }
    }
}

fn export_ranking(target: &Path, candidates: &[Candidate]) -> Result<()> {
    let path = if target.is_dir() {
        export_file_path(target, "candidates")
    } else {
        target.to_path_buf()
    };
    report::export_candidates(&path, candidates)?;
    println!("Exported {} candidates to {}", candidates.len(), path.display());
    Ok(())
}

fn handle_theme(action: Option<ThemeAction>, state_dir: &Path) -> Result<()> {
    let mut store = ThemeStore::open(state_dir);

    match action.unwrap_or(ThemeAction::Show) {
        ThemeAction::Show => println!("Theme: {} ({})", store.theme(), store.path().display()),
        ThemeAction::Toggle => {
            let theme = store.toggle()?;
            println!("Theme switched to {}", theme);
        }
        ThemeAction::Set { theme } => {
            let theme: Theme = theme.parse()?;
            store.set(theme)?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}

fn print_catalog(list: CatalogList) {
    match list {
        CatalogList::Roles => catalog::JOB_ROLES.iter().for_each(|r| println!("{}", r)),
        CatalogList::Locations => catalog::LOCATIONS.iter().for_each(|l| println!("{}", l)),
        CatalogList::Skills => {
            for (category, skills) in catalog::SKILL_CATEGORIES.iter() {
                println!("{}:", category);
                for skill in skills.iter() {
                    println!("  {}", skill);
                }
            }
        }
    }
}
