use application::booking_service::{BookingRequest, BookingService};
use application::chat_controller::{ChatController, SubmitOutcome};
use application::dashboard_service::DashboardService;
use application::reception_service::ReceptionService;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use domain::models::{
    AppointmentPriority, Gender, NewPatient, Patient, PatientQuery,
};
use domain::session::{Message, Sender};
use infrastructure::api_client::ApiClient;
use infrastructure::chat_api::HttpChatBackend;
use infrastructure::config::Config;
use shared::confirmation::ask_confirmation;
use shared::telemetry::Telemetry;
use shared::types::Result;

#[derive(Parser)]
#[command(name = "reception-cli")]
#[command(about = "Terminal client for the hospital reception backend")]
pub struct Cli {
    /// Talk to the AI receptionist (default mode)
    #[arg(long)]
    pub chat: bool,

    /// Register a new patient
    #[arg(long)]
    pub register: bool,

    /// Look up patients by email, phone, or patient id
    #[arg(long)]
    pub lookup: bool,

    /// Book an appointment
    #[arg(long)]
    pub book: bool,

    /// Show the admin dashboard
    #[arg(long)]
    pub dashboard: bool,

    /// Free arguments (e.g. the lookup query)
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self, cli: Cli) -> Result<()> {
        let args_str = cli.args.join(" ");
        if cli.register {
            self.handle_register().await
        } else if cli.lookup {
            self.handle_lookup(&args_str).await
        } else if cli.book {
            self.handle_book().await
        } else if cli.dashboard {
            self.handle_dashboard().await
        } else {
            self.handle_chat().await
        }
    }

    async fn handle_chat(&self) -> Result<()> {
        let backend = HttpChatBackend::new(&self.config)?;
        let controller = ChatController::new(backend);

        for message in controller.history() {
            print_message(&message);
        }
        println!(
            "{}",
            "Type 'new' to start a fresh session, 'exit' to quit.".dimmed()
        );

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;

            match input.trim().to_lowercase().as_str() {
                "exit" | "quit" => break,
                "new" => {
                    controller.reset();
                    println!("{}", "Started a new session.".yellow());
                    for message in controller.history() {
                        print_message(&message);
                    }
                    continue;
                }
                _ => {}
            }

            let timer = Telemetry::start();
            match controller.submit(&input).await {
                SubmitOutcome::Replied(reply) => {
                    println!(
                        "{} {} {}",
                        "Receptionist:".cyan().bold(),
                        reply,
                        format!("({})", timer.elapsed_label()).dimmed()
                    );
                }
                // Guard rejections and displaced turns are silent no-ops.
                SubmitOutcome::Rejected(_) | SubmitOutcome::Superseded => {}
            }
        }
        Ok(())
    }

    async fn handle_register(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        println!("{}", "New patient registration".bold());

        let first_name: String = Input::with_theme(&theme)
            .with_prompt("First name")
            .interact_text()?;
        let last_name: String = Input::with_theme(&theme)
            .with_prompt("Last name")
            .interact_text()?;
        let email: String = Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?;
        let phone: String = Input::with_theme(&theme)
            .with_prompt("Phone")
            .interact_text()?;
        let age: u32 = Input::with_theme(&theme)
            .with_prompt("Age")
            .interact_text()?;

        let genders = ["prefer not to say", "male", "female", "other"];
        let gender = match Select::with_theme(&theme)
            .with_prompt("Gender")
            .items(&genders)
            .default(0)
            .interact()?
        {
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            3 => Some(Gender::Other),
            _ => None,
        };

        let blood_group = optional_input(&theme, "Blood group (optional)")?;
        let address = optional_input(&theme, "Address (optional)")?;
        let emergency_contact_name = optional_input(&theme, "Emergency contact name (optional)")?;
        let emergency_contact_phone = optional_input(&theme, "Emergency contact phone (optional)")?;
        let medical_history = optional_input(&theme, "Medical history (optional)")?;
        let allergies = optional_input(&theme, "Allergies (optional)")?;

        let has_emergency_flag = ask_confirmation("Is this an emergency admission?", false)?;
        let emergency_description = if has_emergency_flag {
            optional_input(&theme, "Describe the emergency")?
        } else {
            None
        };

        let patient = NewPatient {
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            blood_group,
            address,
            emergency_contact_name,
            emergency_contact_phone,
            medical_history,
            allergies,
            has_emergency_flag,
            emergency_description,
        };

        if !ask_confirmation("Submit this registration?", true)? {
            println!("{}", "Registration cancelled.".yellow());
            return Ok(());
        }

        let service = ReceptionService::new(ApiClient::new(&self.config)?);
        let registered = service.register(patient).await?;
        println!(
            "{} Patient ID: {}",
            "Registered.".green().bold(),
            registered.patient_id.bold()
        );
        Ok(())
    }

    async fn handle_lookup(&self, args: &str) -> Result<()> {
        let raw = if args.trim().is_empty() {
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Email, phone, or patient id")
                .interact_text()?
        } else {
            args.to_string()
        };

        let service = ReceptionService::new(ApiClient::new(&self.config)?);
        let patients = service.lookup(&parse_patient_query(&raw)).await?;

        if patients.is_empty() {
            println!("{}", "No matching patients.".yellow());
            return Ok(());
        }
        for patient in &patients {
            print_patient(patient);
        }
        Ok(())
    }

    async fn handle_book(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let api = ApiClient::new(&self.config)?;
        let reception = ReceptionService::new(api.clone());
        let booking = BookingService::new(api);

        let email: String = Input::with_theme(&theme)
            .with_prompt("Patient email")
            .interact_text()?;
        let patients = reception.lookup(&PatientQuery::by_email(email)).await?;
        if patients.is_empty() {
            println!(
                "{}",
                "No patient found with that email. Register first with --register.".yellow()
            );
            return Ok(());
        }
        let patient = if patients.len() == 1 {
            &patients[0]
        } else {
            let labels: Vec<String> = patients
                .iter()
                .map(|p| format!("{} {} <{}>", p.first_name, p.last_name, p.email))
                .collect();
            let picked = Select::with_theme(&theme)
                .with_prompt("Select patient")
                .items(&labels)
                .default(0)
                .interact()?;
            &patients[picked]
        };

        let existing = booking.appointments_for(&patient.id).await?;
        if !existing.is_empty() {
            println!("{}", "Existing appointments:".bold());
            for appointment in &existing {
                println!(
                    "  #{} {} ({:?})",
                    appointment.appointment_number, appointment.appointment_date, appointment.status
                );
            }
        }

        let doctors = booking.doctors().await?;
        let available: Vec<_> = doctors.iter().filter(|d| !d.is_on_leave).collect();
        if available.is_empty() {
            println!("{}", "No doctors are currently available.".yellow());
            return Ok(());
        }
        let labels: Vec<String> = available
            .iter()
            .map(|d| match &d.qualification {
                Some(qualification) => format!("{} ({})", d.name, qualification),
                None => d.name.clone(),
            })
            .collect();
        let picked = Select::with_theme(&theme)
            .with_prompt("Select doctor")
            .items(&labels)
            .default(0)
            .interact()?;
        let doctor = available[picked];

        let date: String = Input::with_theme(&theme)
            .with_prompt("Date (YYYY-MM-DD)")
            .interact_text()?;
        let time: String = Input::with_theme(&theme)
            .with_prompt("Time (HH:MM)")
            .interact_text()?;
        let reason = optional_input(&theme, "Reason for visit (optional)")?;

        let priorities = ["normal", "urgent", "emergency"];
        let priority = match Select::with_theme(&theme)
            .with_prompt("Priority")
            .items(&priorities)
            .default(0)
            .interact()?
        {
            1 => AppointmentPriority::Urgent,
            2 => AppointmentPriority::Emergency,
            _ => AppointmentPriority::Normal,
        };

        println!(
            "Booking {} with {} on {} at {}.",
            format!("{} {}", patient.first_name, patient.last_name).bold(),
            doctor.name.bold(),
            date,
            time
        );
        if !ask_confirmation("Confirm booking?", true)? {
            println!("{}", "Booking cancelled.".yellow());
            return Ok(());
        }

        let appointment = booking
            .book(BookingRequest {
                patient_id: patient.id.clone(),
                doctor_id: doctor.id.clone(),
                department_id: doctor.department_id.clone(),
                date,
                time,
                reason,
                priority,
            })
            .await?;
        println!(
            "{} Appointment #{} on {}",
            "Booked.".green().bold(),
            appointment.appointment_number.bold(),
            appointment.appointment_date
        );
        Ok(())
    }

    async fn handle_dashboard(&self) -> Result<()> {
        let service = DashboardService::new(ApiClient::new(&self.config)?);

        let overview = service.overview().await?;
        println!("{}", "Today".bold());
        println!(
            "  patients registered: {}",
            overview.statistics.total_patients_today
        );
        println!(
            "  appointments:        {}",
            overview.statistics.total_appointments_today
        );
        println!("  pending:             {}", overview.pending_appointments);
        println!("  doctors available:   {}", overview.available_doctors);

        if !overview.recent_patients.is_empty() {
            println!("{}", "Recent patients".bold());
            for patient in overview.recent_patients.iter().take(5) {
                print_patient(patient);
            }
        }

        let emergencies = service.emergency_cases(7).await?;
        let line = format!("Emergency cases (7 days): {}", emergencies.total);
        if emergencies.total > 0 {
            println!("{}", line.red().bold());
        } else {
            println!("{}", line);
        }

        let total = service.total_patients().await?;
        println!("Patients on record: {}", total);
        Ok(())
    }
}

fn print_message(message: &Message) {
    match message.sender {
        Sender::Assistant => println!("{} {}", "Receptionist:".cyan().bold(), message.text),
        Sender::User => println!("{} {}", "You:".green(), message.text),
    }
}

fn print_patient(patient: &Patient) {
    let flag = if patient.has_emergency_flag {
        " [emergency]".red().bold().to_string()
    } else {
        String::new()
    };
    println!(
        "  {} {} {} (age {}) {} / {}{}",
        patient.patient_id.bold(),
        patient.first_name,
        patient.last_name,
        patient.age,
        patient.email,
        patient.phone,
        flag
    );
}

fn optional_input(theme: &ColorfulTheme, prompt: &str) -> Result<Option<String>> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Best-effort classification of a free-form lookup query.
fn parse_patient_query(raw: &str) -> PatientQuery {
    let raw = raw.trim();
    if raw.contains('@') {
        PatientQuery::by_email(raw)
    } else if raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        PatientQuery::by_phone(raw)
    } else {
        PatientQuery::by_patient_id(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_queries_are_classified_by_shape() {
        assert!(parse_patient_query("asha@example.com").email.is_some());
        assert!(parse_patient_query("+1 (555) 010-0100").phone.is_some());
        assert!(parse_patient_query("PAT-2024-0042").patient_id.is_some());
    }
}
