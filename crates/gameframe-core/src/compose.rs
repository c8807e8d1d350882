//! Environment composition for launched processes.

use crate::domain::{Environment, HardwareDescriptor, LaunchDirectives, RuntimeProfile, settings};

pub const ENV_GPU: &str = "GAMEFRAME_GPU";
pub const ENV_VULKAN: &str = "GAMEFRAME_VULKAN";
pub const ENV_OPENGL: &str = "GAMEFRAME_OPENGL";
pub const ENV_FPS_LIMIT: &str = "GAMEFRAME_FPS_LIMIT";
pub const ENV_VSYNC: &str = "GAMEFRAME_VSYNC";
pub const ENV_VKBASALT: &str = "GAMEFRAME_VKBASALT";
pub const ENV_MANGOHUD: &str = "GAMEFRAME_MANGOHUD";

/// Every directive name, in the order they are emitted.
pub const DIRECTIVE_KEYS: [&str; 7] = [
    ENV_GPU,
    ENV_VULKAN,
    ENV_OPENGL,
    ENV_FPS_LIMIT,
    ENV_VSYNC,
    ENV_VKBASALT,
    ENV_MANGOHUD,
];

/// Profile setting exported under each profile-derived directive.
const PROFILE_DIRECTIVES: [(&str, &str); 4] = [
    (ENV_FPS_LIMIT, settings::FPS_LIMIT),
    (ENV_VSYNC, settings::VSYNC),
    (ENV_VKBASALT, settings::VKBASALT),
    (ENV_MANGOHUD, settings::MANGOHUD),
];

/// Derive the seven launch directives.
///
/// Profile values are passed through untouched; a missing setting becomes
/// an empty value rather than an omitted key.
pub fn directives(hw: &HardwareDescriptor, profile: &RuntimeProfile) -> LaunchDirectives {
    let mut directives = LaunchDirectives::new();
    directives.set(ENV_GPU, hw.gpu_vendor.as_str());
    directives.set(ENV_VULKAN, hw.vulkan_supported.to_string());
    directives.set(ENV_OPENGL, hw.opengl_version.as_str());
    for (env_key, setting) in PROFILE_DIRECTIVES {
        directives.set(env_key, profile.setting(setting));
    }
    directives
}

/// Produce the child environment: `inherited` plus the launch directives.
///
/// `inherited` is left untouched.
pub fn compose(
    hw: &HardwareDescriptor,
    profile: &RuntimeProfile,
    inherited: &Environment,
) -> Environment {
    let mut env = inherited.clone();
    env.apply(&directives(hw, profile));
    env
}
