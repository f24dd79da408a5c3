use clap::{Args, Parser, Subcommand};
use rosterapp::model::{FieldKey, StudentInput, StudentPatch};
use rosterapp::search::{SearchKey, SearchMethod};
use rosterapp::sort::{SortMethod, SortOrder};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Student roster manager: records, search, sort, import and export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and roster.toml
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "create")]
    Add(AddArgs),

    /// Change fields of a student
    #[command(alias = "edit")]
    Update {
        /// Id of the student to change
        id: String,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Remove students by id
    #[command(aliases = ["rm", "delete"])]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show one student
    #[command(alias = "get")]
    Show { id: String },

    /// List students in stored order
    #[command(alias = "ls")]
    List,

    /// Search by id or name
    Search {
        /// Text to look for (empty lists everyone)
        #[arg(default_value = "")]
        query: String,

        /// linear, sequential or binary
        #[arg(short, long, default_value = "linear")]
        method: SearchMethod,

        /// id, name or all (binary search treats all as id)
        #[arg(short, long, default_value = "all")]
        key: SearchKey,
    },

    /// Sort the roster and store the new order
    Sort {
        /// insertion, selection, bubble, merge or shell
        #[arg(short, long, default_value = "merge")]
        method: SortMethod,

        /// id, name, email, major or gpa
        #[arg(short, long, default_value = "name")]
        key: FieldKey,

        /// asc or desc
        #[arg(short, long, default_value = "asc")]
        order: SortOrder,

        /// Show the sorted roster without storing the order
        #[arg(long)]
        preview: bool,
    },

    /// Replace the roster with a JSON file
    Import { file: PathBuf },

    /// Write the roster to a JSON file
    Export {
        /// Output path (default: the configured export file in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Remove every student
    Clear,

    /// Roster statistics
    Stats,

    /// Add the sample roster to an empty store
    Seed,

    /// Complexity of every search and sort method
    Algorithms,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Student id (NIM), digits only
    #[arg(long, alias = "nim")]
    pub id: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub major: String,

    /// 0.00 to 4.00, at most two decimals
    #[arg(long)]
    pub gpa: String,
}

impl AddArgs {
    pub fn to_input(&self) -> StudentInput {
        StudentInput::new(
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.major.clone(),
            self.gpa.clone(),
        )
    }
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// New id
    #[arg(long = "id", alias = "nim", value_name = "ID")]
    pub new_id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub major: Option<String>,

    #[arg(long)]
    pub gpa: Option<f64>,
}

impl UpdateArgs {
    pub fn to_patch(&self) -> StudentPatch {
        let trimmed = |v: &Option<String>| v.as_ref().map(|s| s.trim().to_string());
        StudentPatch {
            id: trimmed(&self.new_id),
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            major: trimmed(&self.major),
            gpa: self.gpa,
        }
    }
}
