//! Command-line interface for the hospital scheduling engine.
//!
//! This binary provides an interactive menu for registering patients and
//! doctors, queueing appointment requests, scheduling them and undoing the
//! most recent appointment.

use clap::Parser;
use hospital_scheduler::{DoctorId, PatientId, Scheduler, SchedulerConfig};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "hospital")]
#[command(about = "Hospital appointment scheduling menu")]
struct Args {
    /// Maximum number of pending requests
    #[arg(long, default_value_t = 8)]
    queue_capacity: usize,
    /// Maximum number of schedule records
    #[arg(long, default_value_t = 100)]
    schedule_capacity: usize,
    /// Maximum number of appointments that can be undone
    #[arg(long, default_value_t = 50)]
    undo_capacity: usize,
    /// Longest patient or doctor name kept, in characters
    #[arg(long, default_value_t = 48)]
    max_name_len: usize,
    /// Longest date/time text kept, in characters
    #[arg(long, default_value_t = 64)]
    max_time_len: usize,
}

impl Args {
    fn config(&self) -> SchedulerConfig {
        SchedulerConfig::default()
            .with_queue_capacity(self.queue_capacity)
            .with_schedule_capacity(self.schedule_capacity)
            .with_undo_capacity(self.undo_capacity)
            .with_max_name_len(self.max_name_len)
            .with_max_time_len(self.max_time_len)
    }
}

struct HospitalCLI<R> {
    scheduler: Scheduler,
    input: R,
    running: bool,
}

impl<R: BufRead> HospitalCLI<R> {
    fn new(scheduler: Scheduler, input: R) -> Self {
        HospitalCLI {
            scheduler,
            input,
            running: true,
        }
    }

    fn print_menu(&self) {
        println!("\n=== Hospital Simple Menu ===");
        println!("1  - Add patient");
        println!("2  - Delete patient");
        println!("3  - List patients");
        println!("4  - Add doctor");
        println!("5  - List doctors");
        println!("6  - Enqueue appointment request");
        println!("7  - Show request queue");
        println!("8  - Process next request (schedule)");
        println!("9  - Undo last scheduled appointment");
        println!("10 - Show scheduled appointments");
        println!("0  - Exit");
    }

    /// Read one trimmed line. `None` means stdin is closed.
    fn get_input(&mut self, prompt: &str) -> Option<String> {
        print!("{}: ", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.running = false;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn get_int_input(&mut self, prompt: &str) -> Option<u32> {
        loop {
            let input = self.get_input(prompt)?;
            if let Ok(value) = input.parse::<u32>() {
                return Some(value);
            }
            println!("Please enter a valid number");
        }
    }

    fn add_patient(&mut self) {
        let Some(name) = self.get_input("Enter patient name") else {
            return;
        };
        if name.is_empty() {
            return;
        }
        let id = self.scheduler.add_patient(&name);
        if let Ok(patient) = self.scheduler.find_patient(id) {
            println!("Added patient {}", patient);
        }
    }

    fn delete_patient(&mut self) {
        let Some(id) = self.get_int_input("Enter patient id to delete") else {
            return;
        };
        match self.scheduler.delete_patient(PatientId(id)) {
            Ok(patient) => println!("Deleted patient {}", patient.id.get()),
            Err(_) => println!("Patient {} not found", id),
        }
    }

    fn list_patients(&self) {
        let mut patients = self.scheduler.list_patients().peekable();
        if patients.peek().is_none() {
            println!("(no patients)");
            return;
        }
        println!("Patients (id : name):");
        for patient in patients {
            println!("  {}", patient);
        }
    }

    fn add_doctor(&mut self) {
        let Some(name) = self.get_input("Enter doctor name") else {
            return;
        };
        if name.is_empty() {
            return;
        }
        let id = self.scheduler.add_doctor(&name);
        if let Ok(doctor) = self.scheduler.find_doctor(id) {
            println!("Added doctor {}", doctor);
        }
    }

    fn list_doctors(&self) {
        let mut doctors = self.scheduler.list_doctors().peekable();
        if doctors.peek().is_none() {
            println!("(no doctors)");
            return;
        }
        println!("Doctors (id : name):");
        for doctor in doctors {
            println!("  {}", doctor);
        }
    }

    fn enqueue_request(&mut self) {
        let Some(patient_id) = self.get_int_input("Enter patient id") else {
            return;
        };
        let Some(doctor_id) = self.get_int_input("Enter doctor id") else {
            return;
        };
        let Some(time) = self.get_input("Enter date/time (string)") else {
            return;
        };

        match self
            .scheduler
            .enqueue_request(PatientId(patient_id), DoctorId(doctor_id), &time)
        {
            Ok(id) => {
                if let Some(request) = self.scheduler.list_queue().find(|r| r.id == id) {
                    println!(
                        "Enqueued request {}  patient {} -> doctor {}  at {}",
                        request.id, patient_id, doctor_id, request.time
                    );
                }
            }
            Err(e) => println!("{}", capitalize(&e.to_string())),
        }
    }

    fn show_queue(&self) {
        let mut requests = self.scheduler.list_queue().peekable();
        if requests.peek().is_none() {
            println!("(request queue empty)");
            return;
        }
        println!("Request queue :");
        for request in requests {
            println!("  {}", request);
        }
    }

    fn process_next(&mut self) {
        match self.scheduler.process_next() {
            Ok(scheduled) => {
                println!("{}", scheduled);
                if !scheduled.undo_recorded {
                    println!("undo stack full: this appointment cannot be undone");
                }
            }
            Err(e) => println!("{}", capitalize(&e.to_string())),
        }
    }

    fn undo_last(&mut self) {
        match self.scheduler.undo_last() {
            Ok(undone) => println!("{}", undone),
            Err(e) => println!("{}", capitalize(&e.to_string())),
        }
    }

    fn show_schedule(&self) {
        let mut entries = self.scheduler.list_schedule().peekable();
        if entries.peek().is_none() {
            println!("(no scheduled appointments)");
            return;
        }
        println!("Scheduled appointments:");
        for entry in entries {
            println!("  {}", entry);
        }
    }

    fn run(&mut self) {
        while self.running {
            self.print_menu();

            let Some(choice) = self.get_input("Choose an option") else {
                break;
            };

            match choice.parse::<u32>() {
                Ok(0) => self.running = false,
                Ok(1) => self.add_patient(),
                Ok(2) => self.delete_patient(),
                Ok(3) => self.list_patients(),
                Ok(4) => self.add_doctor(),
                Ok(5) => self.list_doctors(),
                Ok(6) => self.enqueue_request(),
                Ok(7) => self.show_queue(),
                Ok(8) => self.process_next(),
                Ok(9) => self.undo_last(),
                Ok(10) => self.show_schedule(),
                _ => println!("Unknown option"),
            }
        }
        println!("Goodbye");
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hospital_scheduler=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()?;

    let scheduler = Scheduler::new(args.config());
    let stdin = io::stdin();
    let mut cli = HospitalCLI::new(scheduler, stdin.lock());
    cli.run();
    Ok(())
}
