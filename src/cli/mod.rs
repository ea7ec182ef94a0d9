//! Terminal front-end.
//!
//! Every command starts from a restored session; the routing decision picks
//! what the user is allowed to see, exactly like the mobile stacks do.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use diario_auth::{RoleRouter, Route, SessionStore, Stack};
use diario_models::Credentials;

use crate::modules::{
    AttendanceService, ClassroomService, SchoolService, StudentService, TeacherService,
};

#[derive(Parser)]
#[command(name = "diario")]
#[command(about = "Diário Online - school administration client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show who is signed in and which area would open
    Status,
    /// Sign in with email and password
    Login {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// List classrooms of the current school year
    Classrooms,
    /// List students enrolled in a classroom
    Students {
        /// Classroom id
        #[arg(short = 'c', long)]
        classroom: i64,
    },
    /// List the school's teachers
    Teachers,
    /// Show the school's registration and address
    School,
    /// Show which days of a month have attendance recorded
    Attendance {
        /// Classroom id
        #[arg(short = 'c', long)]
        classroom: i64,

        /// Month as YYYY-MM
        #[arg(short = 'm', long)]
        month: String,
    },
}

pub async fn run(session: &SessionStore, command: Commands) -> Result<()> {
    match command {
        Commands::Status => handle_status(session),
        Commands::Login { email, password } => handle_login(session, email, password).await,
        Commands::Logout => {
            session.logout().await;
            println!("✅ Signed out");
            Ok(())
        }
        Commands::Classrooms => handle_classrooms(session).await,
        Commands::Students { classroom } => handle_students(session, classroom).await,
        Commands::Teachers => handle_teachers(session).await,
        Commands::School => handle_school(session).await,
        Commands::Attendance { classroom, month } => {
            handle_attendance(session, classroom, &month).await
        }
    }
}

fn handle_status(session: &SessionStore) -> Result<()> {
    let state = session.state();
    match (RoleRouter::select(&state), &state.user) {
        (Route::Stack(stack), Some(user)) => {
            println!("Signed in as {} <{}>", user.display_name, user.email);
            println!("   Role:  {}", user.role);
            println!("   Area:  {stack}");
        }
        (Route::Stack(_), None) => println!("Not signed in. Run `diario login`."),
        (Route::Loading, _) => println!("Session still loading"),
    }
    Ok(())
}

async fn handle_login(
    session: &SessionStore,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Senha").interact()?,
    };

    match session.try_login(Credentials::new(email, password)).await {
        Ok(user) => {
            println!("\n✅ Bem-vindo, {}!", user.display_name);
            println!("   Area: {}", RoleRouter::stack_for(user.role));
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, "Login failed");
            bail!("{}", e.user_message())
        }
    }
}

fn require_stack(session: &SessionStore, allowed: &[Stack]) -> Result<()> {
    match RoleRouter::select(&session.state()) {
        Route::Stack(Stack::Unauthenticated) => bail!("Not signed in. Run `diario login` first."),
        Route::Stack(stack) if allowed.contains(&stack) => Ok(()),
        Route::Stack(stack) => bail!("Not available for the {stack} area"),
        Route::Loading => bail!("Session still loading"),
    }
}

async fn handle_classrooms(session: &SessionStore) -> Result<()> {
    require_stack(session, &[Stack::School, Stack::Administrator, Stack::Teacher])?;

    let classrooms = ClassroomService::list_current(&session.client()).await?;
    if classrooms.is_empty() {
        println!("No classrooms for the current year");
    }
    for classroom in classrooms {
        println!(
            "{:>5}  {:<30} {:?}  {}",
            classroom.id,
            classroom.description,
            classroom.shift,
            classroom.year_description.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

async fn handle_students(session: &SessionStore, classroom_id: i64) -> Result<()> {
    require_stack(session, &[Stack::School, Stack::Administrator, Stack::Teacher])?;

    let students = StudentService::list_by_classroom(&session.client(), classroom_id).await?;
    if students.is_empty() {
        println!("No students in classroom {classroom_id}");
    }
    for student in students {
        let born = student
            .date_of_birth
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>5}  {:<40} {}", student.id, student.name, born);
    }
    Ok(())
}

async fn handle_teachers(session: &SessionStore) -> Result<()> {
    require_stack(session, &[Stack::School, Stack::Administrator])?;

    let teachers = TeacherService::list(&session.client()).await?;
    if teachers.is_empty() {
        println!("No teachers registered");
    }
    for teacher in teachers {
        println!("{:>5}  {:<40} {}", teacher.id, teacher.name, teacher.email);
    }
    Ok(())
}

async fn handle_school(session: &SessionStore) -> Result<()> {
    require_stack(session, &[Stack::School, Stack::Administrator])?;

    let profile = SchoolService::profile(&session.client()).await?;
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    println!("{}", field(&profile.name));
    println!("   Email:    {}", field(&profile.email));
    println!("   Telefone: {}", field(&profile.phone));
    println!("   INEP:     {}", field(&profile.inep));
    println!("   CNPJ:     {}", field(&profile.cnpj));
    if let Some(address) = profile.address {
        println!(
            "   Endereço: {}, {} - {}/{}",
            address.street, address.number, address.city, address.state
        );
    }
    Ok(())
}

fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{month}', expected YYYY-MM"))
}

async fn handle_attendance(session: &SessionStore, classroom_id: i64, month: &str) -> Result<()> {
    require_stack(session, &[Stack::Teacher])?;

    let first = parse_month(month)?;
    let days =
        AttendanceService::month(&session.client(), classroom_id, first.year(), first.month())
            .await?;
    if days.is_empty() {
        println!("No school days in {month}");
    }
    for day in days {
        let mark = if day.recorded { "✅" } else { "  " };
        println!("{mark} {}", day.date.format("%d/%m/%Y"));
    }
    Ok(())
}
