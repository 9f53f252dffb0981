//! Tareas de mantenimiento: tabla de comandos, reporte y llenado de contenedores.
use log::{info, warn};

use crate::materials_dispenser::MaterialsDispenser;

/// Comandos de mantenimiento (tecla -> descripcion) en el orden en que se agregaron.
#[derive(Debug, Default)]
pub struct AdminCommands {
    commands: Vec<(String, String)>,
}

impl AdminCommands {
    pub fn new() -> AdminCommands {
        AdminCommands::default()
    }

    pub fn exists(&self, keystroke: &str) -> bool {
        self.commands.iter().any(|(key, _)| key == keystroke)
    }

    pub fn add(&mut self, keystroke: &str, description: &str) -> bool {
        if self.exists(keystroke) {
            warn!("[MAINTENANCE] {} is already an admin command", keystroke);
            return false;
        }
        self.commands.push((keystroke.to_string(), description.to_string()));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands
            .iter()
            .map(|(key, description)| (key.as_str(), description.as_str()))
    }
}

#[derive(Debug, PartialEq)]
pub struct ContainerLevel {
    pub material: String,
    pub capacity: f64,
    pub volume: f64,
}

pub fn report_containers_levels(materials: &MaterialsDispenser) -> Vec<ContainerLevel> {
    materials
        .materials()
        .into_iter()
        .filter_map(|material| {
            Some(ContainerLevel {
                material: material.to_string(),
                capacity: materials.capacity_of(material)?,
                volume: materials.volume_of(material)?,
            })
        })
        .collect()
}

/// Llena todos los contenedores. Devuelve el primer ingrediente que no se pudo llenar.
pub fn refill_all_containers(materials: &mut MaterialsDispenser) -> Result<(), String> {
    let all: Vec<String> = materials.materials().into_iter().map(String::from).collect();
    for material in all {
        if !materials.refill(&material) {
            return Err(material);
        }
    }
    info!("[MAINTENANCE] All containers refilled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_a_repeated_keystroke() {
        let mut commands = AdminCommands::new();
        assert_eq!(true, commands.add("/r", "Report containers current volume"));
        assert_eq!(false, commands.add("/r", "Something else"));
        let listed: Vec<(&str, &str)> = commands.iter().collect();
        assert_eq!(vec![("/r", "Report containers current volume")], listed);
    }

    #[test]
    fn should_keep_commands_in_insertion_order() {
        let mut commands = AdminCommands::new();
        commands.add("/r", "report");
        commands.add("/f", "refill");
        commands.add("/a", "add");
        let keys: Vec<&str> = commands.iter().map(|(key, _)| key).collect();
        assert_eq!(vec!["/r", "/f", "/a"], keys);
    }

    #[test]
    fn should_report_every_container() {
        let mut materials = MaterialsDispenser::new();
        materials.allocate("water", 1000.0);
        materials.allocate("coffee", 60.0);
        materials.refill("coffee");
        let report = report_containers_levels(&materials);
        assert_eq!(
            vec![
                ContainerLevel {
                    material: "water".to_string(),
                    capacity: 1000.0,
                    volume: 0.0
                },
                ContainerLevel {
                    material: "coffee".to_string(),
                    capacity: 60.0,
                    volume: 60.0
                },
            ],
            report
        );
    }

    #[test]
    fn should_refill_every_container() {
        let mut materials = MaterialsDispenser::new();
        materials.allocate("water", 1000.0);
        materials.allocate("milk", 300.0);
        assert_eq!(Ok(()), refill_all_containers(&mut materials));
        assert_eq!(Some(1000.0), materials.volume_of("water"));
        assert_eq!(Some(300.0), materials.volume_of("milk"));
    }
}
