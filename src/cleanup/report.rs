//! Per-run tallies.

/// The five deletion passes, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Users,
    CustomAttributes,
    Tenants,
    Permissions,
    Roles,
}

impl Pass {
    pub const ALL: [Pass; 5] = [
        Pass::Users,
        Pass::CustomAttributes,
        Pass::Tenants,
        Pass::Permissions,
        Pass::Roles,
    ];
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Pass::Users => "users",
            Pass::CustomAttributes => "custom user attributes",
            Pass::Tenants => "tenants",
            Pass::Permissions => "permissions",
            Pass::Roles => "roles",
        };
        f.write_str(label)
    }
}

/// A pass that failed without halting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPass {
    pub pass: Pass,
    pub reason: String,
}

/// What a run deleted and what it skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub users: usize,
    pub custom_attributes: usize,
    pub tenants: usize,
    pub permissions: usize,
    pub roles: usize,
    pub skipped: Vec<SkippedPass>,
}

impl RunSummary {
    pub fn deleted(&self, pass: Pass) -> usize {
        match pass {
            Pass::Users => self.users,
            Pass::CustomAttributes => self.custom_attributes,
            Pass::Tenants => self.tenants,
            Pass::Permissions => self.permissions,
            Pass::Roles => self.roles,
        }
    }

    pub fn record(&mut self, pass: Pass, count: usize) {
        match pass {
            Pass::Users => self.users = count,
            Pass::CustomAttributes => self.custom_attributes = count,
            Pass::Tenants => self.tenants = count,
            Pass::Permissions => self.permissions = count,
            Pass::Roles => self.roles = count,
        }
    }

    pub fn skip(&mut self, pass: Pass, reason: impl Into<String>) {
        self.skipped.push(SkippedPass {
            pass,
            reason: reason.into(),
        });
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Emit one log line per pass plus any skips.
    pub fn log(&self) {
        for pass in Pass::ALL {
            tracing::info!(pass = %pass, deleted = self.deleted(pass), "Pass finished");
        }
        for skipped in &self.skipped {
            tracing::warn!(pass = %skipped.pass, reason = %skipped.reason, "Pass skipped");
        }
    }
}
