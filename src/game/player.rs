use log::info;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerUps {
    pub shield: u32,
    pub heal: u32,
}

/// Efecto de una respuesta sobre el jugador. Siempre exactamente uno.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerEffect {
    Rewarded { xp: u32, combo_heal: Option<u32> },
    Shielded,
    Damaged { amount: u32, eliminated: bool },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub avatar: String,
    pub hp: u32,
    pub max_hp: u32,
    pub xp: u32,
    pub streak: u32,
    pub powerups: PowerUps,
    pub eliminated: bool,
    final_score: Option<u32>,
}

impl Player {
    pub fn new(name: &str, avatar: &str, rules: &GameConfig) -> Self {
        Self {
            name: name.to_string(),
            avatar: avatar.to_string(),
            hp: rules.max_hp,
            max_hp: rules.max_hp,
            xp: 0,
            streak: 0,
            powerups: PowerUps::default(),
            eliminated: false,
            final_score: None,
        }
    }

    /// Aplica `delta` a la vida, siempre dentro de `[0, max_hp]`.
    /// Devuelve cuánto cambió realmente.
    pub fn change_hp(&mut self, delta: i64) -> i64 {
        let old = self.hp;
        let new = (self.hp as i64 + delta).clamp(0, self.max_hp as i64);
        self.hp = new as u32;
        new - old as i64
    }

    pub fn apply_correct(&mut self, rules: &GameConfig) -> AnswerEffect {
        self.xp = self.xp.saturating_add(rules.xp_per_correct);
        self.streak += 1;

        // Combo: cura y la racha vuelve a cero
        let combo_heal = if self.streak >= rules.combo_threshold {
            let healed = self.change_hp(rules.combo_heal as i64);
            self.streak = 0;
            Some(healed as u32)
        } else {
            None
        };

        AnswerEffect::Rewarded {
            xp: rules.xp_per_correct,
            combo_heal,
        }
    }

    /// Un escudo anula el fallo por completo, racha incluida.
    pub fn apply_miss(&mut self, rules: &GameConfig) -> AnswerEffect {
        if self.powerups.shield > 0 {
            self.powerups.shield -= 1;
            return AnswerEffect::Shielded;
        }

        let lost = -self.change_hp(-(rules.damage_per_miss as i64));
        self.streak = 0;
        let eliminated = self.check_elimination();
        AnswerEffect::Damaged {
            amount: lost as u32,
            eliminated,
        }
    }

    /// Marca la eliminación la primera vez que la vida llega a 0.
    /// Devuelve `true` solo en esa primera vez.
    pub fn check_elimination(&mut self) -> bool {
        if self.hp == 0 && !self.eliminated {
            self.eliminated = true;
            info!("{} has been eliminated", self.name);
            return true;
        }
        false
    }

    /// Consume un power-up de curación. Devuelve la vida recuperada.
    pub fn use_heal(&mut self, rules: &GameConfig) -> Option<u32> {
        if self.eliminated || self.powerups.heal == 0 {
            return None;
        }
        self.powerups.heal -= 1;
        Some(self.change_hp(rules.heal_powerup as i64) as u32)
    }

    pub fn grant_survival_bonus(&mut self) {
        self.powerups.shield += 1;
        self.powerups.heal += 1;
    }

    /// `xp + 2*hp`, calculado una sola vez; las llamadas siguientes devuelven el mismo valor.
    pub fn finalize_score(&mut self) -> u32 {
        *self
            .final_score
            .get_or_insert(self.xp.saturating_add(self.hp.saturating_mul(2)))
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }
}
