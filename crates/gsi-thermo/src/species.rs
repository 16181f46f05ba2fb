//! Gas-phase species definitions.

/// Gas-phase species relevant for air and carbon ablation at a hypersonic wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Atomic nitrogen (N)
    N,
    /// Atomic oxygen (O)
    O,
    /// Nitric oxide (NO)
    NO,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Atomic carbon (C)
    C,
    /// Dicarbon (C₂)
    C2,
    /// Tricarbon (C₃)
    C3,
    /// Cyano radical (CN)
    CN,
    /// Carbon monoxide (CO)
    CO,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Argon (Ar)
    Ar,
    /// Free electron (e⁻)
    Electron,
}

impl Species {
    pub const ALL: [Species; 13] = [
        Species::N,
        Species::O,
        Species::NO,
        Species::N2,
        Species::O2,
        Species::C,
        Species::C2,
        Species::C3,
        Species::CN,
        Species::CO,
        Species::CO2,
        Species::Ar,
        Species::Electron,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::N => "N",
            Species::O => "O",
            Species::NO => "NO",
            Species::N2 => "N2",
            Species::O2 => "O2",
            Species::C => "C",
            Species::C2 => "C2",
            Species::C3 => "C3",
            Species::CN => "CN",
            Species::CO => "CO",
            Species::CO2 => "CO2",
            Species::Ar => "Ar",
            Species::Electron => "e-",
        }
    }

    /// Get molar mass [kg/mol] for this species.
    ///
    /// Built from standard atomic weights; the electron uses its rest mass.
    pub fn molar_mass(&self) -> f64 {
        match self {
            Species::N => 14.0067e-3,
            Species::O => 15.9994e-3,
            Species::NO => 30.0061e-3,
            Species::N2 => 28.0134e-3,
            Species::O2 => 31.9988e-3,
            Species::C => 12.0107e-3,
            Species::C2 => 24.0214e-3,
            Species::C3 => 36.0321e-3,
            Species::CN => 26.0174e-3,
            Species::CO => 28.0101e-3,
            Species::CO2 => 44.0095e-3,
            Species::Ar => 39.948e-3,
            Species::Electron => 5.485_799_09e-7,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Species keys are case sensitive: "CO" and "Co" are different things.
        match s.trim() {
            "N" => Ok(Species::N),
            "O" => Ok(Species::O),
            "NO" => Ok(Species::NO),
            "N2" => Ok(Species::N2),
            "O2" => Ok(Species::O2),
            "C" => Ok(Species::C),
            "C2" => Ok(Species::C2),
            "C3" => Ok(Species::C3),
            "CN" => Ok(Species::CN),
            "CO" => Ok(Species::CO),
            "CO2" => Ok(Species::CO2),
            "Ar" => Ok(Species::Ar),
            "e-" => Ok(Species::Electron),
            _ => Err("unknown species"),
        }
    }
}
