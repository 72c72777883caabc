//! Attack strategies: swappable damage and range profiles

use glam::Vec3;
use tracing::{info, warn};

/// Result of a single attack attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    Melee { damage: f32 },
    /// Projectile fired along a unit direction
    Projectile { direction: Vec3, damage: f32 },
    /// Everything within `radius` of `center` is hit
    Area { center: Vec3, radius: f32, damage: f32 },
    OutOfRange { distance: f32, range: f32 },
}

/// How a character attacks
pub trait AttackStrategy {
    fn name(&self) -> &'static str;

    fn damage(&self) -> f32;

    fn range(&self) -> f32;

    fn attack(&self, attacker: Vec3, target: Vec3) -> AttackOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeleeAttack;

#[derive(Debug, Clone, Copy, Default)]
pub struct RangedAttack;

#[derive(Debug, Clone, Copy, Default)]
pub struct AreaAttack;

impl AttackStrategy for MeleeAttack {
    fn name(&self) -> &'static str {
        "melee"
    }

    fn damage(&self) -> f32 {
        20.0
    }

    fn range(&self) -> f32 {
        2.0
    }

    fn attack(&self, attacker: Vec3, target: Vec3) -> AttackOutcome {
        let distance = attacker.distance(target);
        if distance <= self.range() {
            AttackOutcome::Melee {
                damage: self.damage(),
            }
        } else {
            AttackOutcome::OutOfRange {
                distance,
                range: self.range(),
            }
        }
    }
}

impl AttackStrategy for RangedAttack {
    fn name(&self) -> &'static str {
        "ranged"
    }

    fn damage(&self) -> f32 {
        15.0
    }

    fn range(&self) -> f32 {
        10.0
    }

    fn attack(&self, attacker: Vec3, target: Vec3) -> AttackOutcome {
        let distance = attacker.distance(target);
        if distance <= self.range() {
            AttackOutcome::Projectile {
                direction: (target - attacker).normalize_or_zero(),
                damage: self.damage(),
            }
        } else {
            AttackOutcome::OutOfRange {
                distance,
                range: self.range(),
            }
        }
    }
}

impl AttackStrategy for AreaAttack {
    fn name(&self) -> &'static str {
        "area"
    }

    fn damage(&self) -> f32 {
        10.0
    }

    fn range(&self) -> f32 {
        5.0
    }

    // Always fires, centred on the attacker
    fn attack(&self, attacker: Vec3, _target: Vec3) -> AttackOutcome {
        AttackOutcome::Area {
            center: attacker,
            radius: self.range(),
            damage: self.damage(),
        }
    }
}

/// A combatant with a swappable attack strategy
pub struct Character {
    position: Vec3,
    target: Option<Vec3>,
    strategy: Box<dyn AttackStrategy>,
}

impl Character {
    /// Creates a character at `position` using melee attacks
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: None,
            strategy: Box::new(MeleeAttack),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn AttackStrategy>) {
        info!(
            strategy = strategy.name(),
            range = strategy.range(),
            damage = strategy.damage(),
            "Attack strategy changed"
        );
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> &dyn AttackStrategy {
        self.strategy.as_ref()
    }

    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Attacks the current target, `None` when there is no target
    pub fn perform_attack(&self) -> Option<AttackOutcome> {
        let Some(target) = self.target else {
            warn!("Cannot attack: missing target");
            return None;
        };
        Some(self.strategy.attack(self.position, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_melee_range() {
        let mut character = Character::new(Vec3::ZERO);
        character.set_target(Some(Vec3::new(1.5, 0.0, 0.0)));
        assert_eq!(
            character.perform_attack(),
            Some(AttackOutcome::Melee { damage: 20.0 })
        );

        character.set_target(Some(Vec3::new(3.0, 0.0, 0.0)));
        assert_eq!(
            character.perform_attack(),
            Some(AttackOutcome::OutOfRange {
                distance: 3.0,
                range: 2.0
            })
        );
    }

    #[test]
    fn test_ranged_direction_is_normalized() {
        let mut character = Character::new(Vec3::ZERO);
        character.set_strategy(Box::new(RangedAttack));
        character.set_target(Some(Vec3::new(0.0, 0.0, 8.0)));
        assert_eq!(
            character.perform_attack(),
            Some(AttackOutcome::Projectile {
                direction: Vec3::Z,
                damage: 15.0
            })
        );
    }

    #[test]
    fn test_area_ignores_distance() {
        let mut character = Character::new(Vec3::ONE);
        character.set_strategy(Box::new(AreaAttack));
        character.set_target(Some(Vec3::splat(100.0)));
        assert_eq!(
            character.perform_attack(),
            Some(AttackOutcome::Area {
                center: Vec3::ONE,
                radius: 5.0,
                damage: 10.0
            })
        );
    }

    #[test]
    fn test_no_target_no_attack() {
        let character = Character::new(Vec3::ZERO);
        assert_eq!(character.strategy().name(), "melee");
        assert_eq!(character.perform_attack(), None);
    }
}
