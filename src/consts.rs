//! Configuration de l'outil en ligne de commande.

use log::LevelFilter;

pub const LOG_FILE: &str = "./usercheck.log"; // Fichier de log par défaut.
pub const LOG_FILE_ENV: &str = "USERCHECK_LOG"; // Variable d'environnement remplaçant LOG_FILE.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
