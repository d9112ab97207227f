//! Meshes for the raft's splash particles and ripples.
//!
//! Particle meshes are rebuilt whenever the splash generation changes and
//! otherwise only have their transform, visibility and alpha updated.
//! Ripples are matched by id and their ring mesh is rebuilt each frame.

use std::{collections::HashMap, f32::consts::FRAC_PI_2};

use bevy::prelude::*;
use sim::{
    effects::{splash::PARTICLE_SIZE, Ripple, SplashEffect},
    Character,
};

use crate::constants::{RIPPLE_COLOR, RIPPLE_RESOLUTION};

/// Visual entities spawned for a character's splash effect.
#[derive(Component, Default)]
pub struct SplashVisuals {
    generation: u64,
    particles: Vec<Entity>,
    ripples: HashMap<u64, Entity>,
}

#[derive(Component)]
pub struct ParticleVisual;

#[derive(Component)]
pub struct RippleVisual;

#[derive(Resource)]
pub struct SplashAssets {
    particle_mesh: Handle<Mesh>,
}

pub fn setup_splash_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(SplashAssets {
        particle_mesh: meshes.add(Sphere::new(PARTICLE_SIZE).mesh().uv(4, 4)),
    });
}

fn ripple_mesh(ripple: &Ripple) -> Mesh {
    Annulus::new(ripple.inner_radius(), ripple.outer_radius())
        .mesh()
        .resolution(RIPPLE_RESOLUTION)
        .build()
}

fn translucent(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

fn set_alpha(
    materials: &mut Assets<StandardMaterial>,
    material: &MeshMaterial3d<StandardMaterial>,
    alpha: f32,
) {
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color.set_alpha(alpha);
    }
}

fn spawn_particles(
    commands: &mut Commands,
    assets: &SplashAssets,
    materials: &mut Assets<StandardMaterial>,
    splash: &SplashEffect,
) -> Vec<Entity> {
    let mut entities = Vec::new();
    for system in splash.systems() {
        for particle in &system.particles {
            let color = Color::hsla(
                particle.hsl.x * 360.0,
                particle.hsl.y,
                particle.hsl.z,
                particle.opacity,
            );
            let entity = commands
                .spawn((
                    ParticleVisual,
                    Mesh3d(assets.particle_mesh.clone()),
                    MeshMaterial3d(materials.add(translucent(color))),
                    Transform::from_translation(system.world_position(particle))
                        .with_scale(Vec3::splat(particle.scale)),
                ))
                .id();
            entities.push(entity);
        }
    }
    entities
}

pub fn sync_splash_visuals_system(
    mut commands: Commands,
    assets: Res<SplashAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut characters: Query<(&Character, &mut SplashVisuals)>,
    mut particles: Query<
        (
            &mut Transform,
            &mut Visibility,
            &MeshMaterial3d<StandardMaterial>,
        ),
        (With<ParticleVisual>, Without<RippleVisual>),
    >,
    ripples: Query<(&Mesh3d, &MeshMaterial3d<StandardMaterial>), With<RippleVisual>>,
) {
    for (character, mut visuals) in &mut characters {
        let splash = character.raft().splash();

        if visuals.generation != splash.generation() {
            for entity in visuals.particles.drain(..) {
                commands.entity(entity).despawn();
            }
            visuals.particles = spawn_particles(&mut commands, &assets, &mut materials, splash);
            visuals.generation = splash.generation();
        } else {
            let states = splash
                .systems()
                .iter()
                .flat_map(|s| s.particles.iter().map(move |p| (s, p)));
            for (entity, (system, particle)) in visuals.particles.iter().zip(states) {
                let Ok((mut transform, mut visibility, material)) = particles.get_mut(*entity)
                else {
                    continue;
                };
                transform.translation = system.world_position(particle);
                *visibility = if particle.active {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
                set_alpha(&mut materials, material, particle.opacity);
            }
        }

        let alive: Vec<u64> = splash.ripples().iter().map(Ripple::id).collect();
        visuals.ripples.retain(|id, entity| {
            let keep = alive.contains(id);
            if !keep {
                commands.entity(*entity).despawn();
            }
            keep
        });

        for ripple in splash.ripples() {
            match visuals.ripples.get(&ripple.id()) {
                Some(entity) => {
                    let Ok((mesh, material)) = ripples.get(*entity) else {
                        continue;
                    };
                    if let Some(mesh) = meshes.get_mut(&mesh.0) {
                        *mesh = ripple_mesh(ripple);
                    }
                    set_alpha(&mut materials, material, ripple.opacity());
                }
                None => {
                    let entity = commands
                        .spawn((
                            RippleVisual,
                            Mesh3d(meshes.add(ripple_mesh(ripple))),
                            MeshMaterial3d(materials.add(translucent(
                                RIPPLE_COLOR.with_alpha(ripple.opacity()),
                            ))),
                            Transform::from_translation(ripple.position())
                                .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                        ))
                        .id();
                    visuals.ripples.insert(ripple.id(), entity);
                }
            }
        }
    }
}
