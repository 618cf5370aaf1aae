// ============================================================
// Layer 2 — Form Options
// ============================================================
// The choices every dropdown offers. Five lists come from the
// reference table; the rest are fixed. Built once after the
// artifacts load and shared by the terminal form, the `options`
// command, and the `predict` command's input check.

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::domain::laptop::{
    LaptopSpec, YesNo, HDD_CHOICES, RAM_CHOICES, RESOLUTION_CHOICES, SSD_CHOICES,
};
use crate::domain::record::{COMPANY, CPU_BRAND, GPU_BRAND, OS, TYPE_NAME};
use crate::domain::traits::CategorySource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormOptions {
    pub company:     Vec<String>,
    pub type_name:   Vec<String>,
    pub ram:         Vec<u32>,
    pub touchscreen: Vec<YesNo>,
    pub ips:         Vec<YesNo>,
    pub resolution:  Vec<String>,
    pub cpu_brand:   Vec<String>,
    pub hdd:         Vec<u32>,
    pub ssd:         Vec<u32>,
    pub gpu_brand:   Vec<String>,
    pub os:          Vec<String>,
}

impl FormOptions {
    pub fn from_source(source: &impl CategorySource) -> Result<Self> {
        let distinct = |column: &str| {
            source
                .distinct_values(column)
                .with_context(|| format!("listing choices for '{column}'"))
        };

        Ok(Self {
            company:     distinct(COMPANY)?,
            type_name:   distinct(TYPE_NAME)?,
            ram:         RAM_CHOICES.to_vec(),
            touchscreen: YesNo::ALL.to_vec(),
            ips:         YesNo::ALL.to_vec(),
            resolution:  RESOLUTION_CHOICES.iter().map(|r| r.to_string()).collect(),
            cpu_brand:   distinct(CPU_BRAND)?,
            hdd:         HDD_CHOICES.to_vec(),
            ssd:         SSD_CHOICES.to_vec(),
            gpu_brand:   distinct(GPU_BRAND)?,
            os:          distinct(OS)?,
        })
    }

    /// The LaptopSpec a freshly opened form submits: the first option of
    /// every dropdown, zero for the free numeric inputs.
    #[cfg(test)]
    pub fn default_spec(&self) -> LaptopSpec {
        LaptopSpec {
            company:     first_or_empty(&self.company),
            type_name:   first_or_empty(&self.type_name),
            ram:         self.ram.first().copied().unwrap_or_default(),
            weight:      0.0,
            touchscreen: YesNo::No,
            ips:         YesNo::No,
            screen_size: 0.0,
            resolution:  first_or_empty(&self.resolution),
            cpu_brand:   first_or_empty(&self.cpu_brand),
            hdd:         self.hdd.first().copied().unwrap_or_default(),
            ssd:         self.ssd.first().copied().unwrap_or_default(),
            gpu_brand:   first_or_empty(&self.gpu_brand),
            os:          first_or_empty(&self.os),
        }
    }

    /// Check that every dropdown value in `spec` is one the form
    /// would have offered. Resolution is free text and left to the
    /// predictor's parser.
    pub fn validate(&self, spec: &LaptopSpec) -> Result<()> {
        check_one_of("Brand", &spec.company, &self.company)?;
        check_one_of("Type", &spec.type_name, &self.type_name)?;
        check_one_of("Ram (in GB)", &spec.ram, &self.ram)?;
        check_one_of("CPU", &spec.cpu_brand, &self.cpu_brand)?;
        check_one_of("HDD (in GB)", &spec.hdd, &self.hdd)?;
        check_one_of("SSD (in GB)", &spec.ssd, &self.ssd)?;
        check_one_of("GPU", &spec.gpu_brand, &self.gpu_brand)?;
        check_one_of("OS", &spec.os, &self.os)?;
        Ok(())
    }
}

#[cfg(test)]
fn first_or_empty(list: &[String]) -> String {
    list.first().cloned().unwrap_or_default()
}

fn check_one_of<T>(label: &str, value: &T, choices: &[T]) -> Result<()>
where
    T: PartialEq + std::fmt::Display,
{
    if choices.contains(value) {
        return Ok(());
    }
    let listed = choices
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    bail!("'{value}' is not a valid choice for {label}; choose one of: {listed}")
}
