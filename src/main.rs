mod consts;

use anyhow::Result;
use derive_more::Display;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use usercheck::{check_registration, check_update, LogSink, Notification, NotificationSink};

use crate::consts::{LOG_FILE, LOG_FILE_ENV, LOG_LEVEL};

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// Représente un menu texte
trait Menu {
    /// Implémente le contenu du menu. La valeur de retour
    /// doit être None si le menu souhaite terminer,
    /// ou Some(()) s'il faut le relancer.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Lance le menu en boucle, en interceptant les erreurs,
    /// sauf si le menu souhaite quitter.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Erreur: {error}");
            }
        }
    }
}

/// Affiche les notifications dans le terminal et les garde dans le log
struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn flash(&mut self, notification: Notification) {
        match serde_json::to_string_pretty(&notification) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("[!] {}: {}", notification.title, notification.message),
        }
        LogSink.flash(notification);
    }
}

struct App;

impl App {
    fn start(&mut self) -> Result<()> {
        println!("Vérification des formulaires d'inscription et de profil.");
        self.enter_loop();
        Ok(())
    }
}

fn prompt_password() -> Result<String> {
    Ok(Password::new("Mot de passe :")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?)
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Créer un compte")]
            Register,
            #[display("Mettre à jour le profil")]
            Update,
            #[display("Quitter")]
            Exit,
        }

        let choice = Select::new("Que voulez-vous faire ?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Register => {
                let login = Text::new("Login :").prompt()?;
                let password = prompt_password()?;
                let email = Text::new("Email :").prompt()?;
                let name = Text::new("Nom :").prompt()?;

                if check_registration(&mut TerminalSink, &login, &password, &email, &name) {
                    println!("[*] Formulaire d'inscription valide pour {login}.");
                }
                Ok(MENU_LOOP)
            }
            Choice::Update => {
                let password = prompt_password()?;
                let email = Text::new("Email :").prompt()?;
                let name = Text::new("Nom :").prompt()?;

                if check_update(&mut TerminalSink, &password, &email, &name) {
                    println!("[*] Formulaire de profil valide.");
                }
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

fn main() -> Result<()> {
    let log_file = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| LOG_FILE.to_owned());
    simple_logging::log_to_file(&log_file, LOG_LEVEL)?;

    App.start()
}
